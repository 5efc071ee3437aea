mod common;

use mockall::mock;
use std::sync::Arc;
use swarm_tracker::stats::stats::{estimate_speed, is_seeder};
use swarm_tracker::stats::traits::hit_and_run_notifier::HitAndRunNotifier;
use swarm_tracker::tracker::enums::announce_event::AnnounceEvent;
use swarm_tracker::tracker::enums::tracker_error::TrackerError;
use swarm_tracker::tracker::structs::peer::Peer;
use swarm_tracker::tracker::structs::peer_id::PeerId;
use swarm_tracker::tracker::structs::scrape_request::ScrapeRequest;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;

mock! {
    pub Notifier {}
    impl HitAndRunNotifier for Notifier {
        fn notify(&self, peer: &Peer);
    }
}

#[test]
fn test_speed_estimation() {
    assert_eq!(estimate_speed(common::NOW, common::NOW, 1000), 0.0, "No elapsed time means no speed");
    assert_eq!(estimate_speed(common::NOW, common::NOW - 5, 1000), 0.0, "Clock skew means no speed");
    assert_eq!(estimate_speed(common::NOW, common::NOW + 10, 1000), 100.0, "1000 bytes over 10s is 100 B/s");
}

#[test]
fn test_restart_detection_never_credits_negative() {
    let tracker = common::create_test_tracker(common::create_test_config());
    let info_hash = common::random_info_hash();
    let peer_id = common::random_peer_id();
    tracker.add_torrent(info_hash, 1);

    tracker.handle_announce_at(common::announce_request(info_hash, peer_id, AnnounceEvent::None, 5000, 8000, 100), common::NOW).unwrap();
    let data = tracker.handle_announce_at(common::announce_request(info_hash, peer_id, AnnounceEvent::None, 10, 8000, 100), common::NOW + 60).unwrap();

    assert_eq!(data.delta.uploaded, 0, "Lower upload total should reset, not credit");
    assert_eq!(data.delta.downloaded, 0, "Download delta should be zero on reset");
    let peer = tracker.get_peer(&info_hash, &peer_id).unwrap();
    assert_eq!(peer.uploaded, 10, "Baseline should be the reported total");
    assert_eq!(peer.downloaded, 8000);
}

#[test]
fn test_delta_accounting_sequence() {
    let tracker = common::create_test_tracker(common::create_test_config());
    let info_hash = common::random_info_hash();
    let peer_id = common::random_peer_id();
    tracker.add_torrent(info_hash, 1);

    let steps = [
        (AnnounceEvent::Started, 100u64, 0u64),
        (AnnounceEvent::None, 150, 50),
        (AnnounceEvent::None, 140, 0),
    ];
    for (i, (event, uploaded, expected)) in steps.into_iter().enumerate() {
        let request = common::announce_request(info_hash, peer_id, event, uploaded, 0, 10);
        let data = tracker.handle_announce_at(request, common::NOW + i as i64 * 60).unwrap();
        assert_eq!(data.delta.uploaded, expected, "Unexpected delta at step {}", i);
        assert_eq!(tracker.get_peer(&info_hash, &peer_id).unwrap().uploaded, uploaded);
    }
    assert_eq!(tracker.get_stats().uploaded, 50, "Only the positive delta should be counted");
}

#[test]
fn test_seeder_classification_in_counts() {
    let tracker = common::create_test_tracker(common::create_test_config());
    let info_hash = common::random_info_hash();
    tracker.add_torrent(info_hash, 1);

    let seeder = common::random_peer_id();
    let leecher = common::random_peer_id();
    tracker.handle_announce_at(common::announce_request(info_hash, seeder, AnnounceEvent::Started, 0, 0, 0), common::NOW).unwrap();
    let data = tracker.handle_announce_at(common::announce_request(info_hash, leecher, AnnounceEvent::Started, 0, 0, 500), common::NOW).unwrap();

    assert_eq!(data.complete, 1, "Should have 1 seeder");
    assert_eq!(data.incomplete, 1, "Should have 1 leecher");
    assert_eq!(data.peers.len(), 1, "Requester should not be in its own peer list");
    assert_eq!(data.peers[0].peer_id, seeder);
    assert!(is_seeder(&tracker.get_peer(&info_hash, &seeder).unwrap()));
    assert!(!is_seeder(&tracker.get_peer(&info_hash, &leecher).unwrap()));
    assert_eq!(tracker.get_stats().seeds, 1);
}

#[test]
fn test_stopped_peer_leaves_counts() {
    let tracker = common::create_test_tracker(common::create_test_config());
    let info_hash = common::random_info_hash();
    let peer_id = common::random_peer_id();
    tracker.add_torrent(info_hash, 1);

    tracker.handle_announce_at(common::announce_request(info_hash, peer_id, AnnounceEvent::Started, 0, 0, 0), common::NOW).unwrap();
    tracker.handle_announce_at(common::announce_request(info_hash, peer_id, AnnounceEvent::Stopped, 0, 0, 0), common::NOW + 30).unwrap();

    let counts = tracker.swarm_counts(&info_hash).unwrap();
    assert_eq!(counts.seeders, 0, "Stopped seeder should not be counted");
    assert_eq!(tracker.get_stats().seeds, 0);
    assert_eq!(tracker.reap_eligible(common::NOW + 30, 2700), vec![(info_hash, peer_id)]);
}

#[test]
fn test_hit_and_run_notified_once() {
    let mut config = common::create_test_config();
    config.tracker_config.hnr_enabled = true;
    config.tracker_config.hnr_min_bytes = 1000;
    config.tracker_config.hnr_threshold = 86400;

    let mut notifier = MockNotifier::new();
    notifier.expect_notify()
        .withf(|peer: &Peer| peer.user_id == 42 && peer.downloaded >= 1000)
        .times(1)
        .return_const(());

    let tracker = TorrentTracker::new(Arc::new(config)).with_notifier(Arc::new(notifier));
    let info_hash = common::random_info_hash();
    let peer_id = common::random_peer_id();
    tracker.add_torrent(info_hash, 7);

    tracker.handle_announce_at(common::announce_request(info_hash, peer_id, AnnounceEvent::Started, 0, 0, 5000), common::NOW).unwrap();
    assert!(tracker.set_peer_user(&info_hash, &peer_id, 42, "alice"));
    for step in 1..=4u64 {
        let request = common::announce_request(info_hash, peer_id, AnnounceEvent::None, 0, 1000 * step, 5000 - 1000 * step);
        tracker.handle_announce_at(request, common::NOW + step as i64 * 60).unwrap();
    }

    assert_eq!(tracker.get_stats().hit_and_runs, 1, "Hit-and-run should be counted once");
    assert!(tracker.get_peer(&info_hash, &peer_id).unwrap().hnr_flagged);
}

#[test]
fn test_hit_and_run_disabled_never_notifies() {
    let mut notifier = MockNotifier::new();
    notifier.expect_notify().times(0);

    let tracker = TorrentTracker::new(Arc::new(common::create_test_config())).with_notifier(Arc::new(notifier));
    let info_hash = common::random_info_hash();
    let peer_id = common::random_peer_id();
    tracker.add_torrent(info_hash, 7);

    tracker.handle_announce_at(common::announce_request(info_hash, peer_id, AnnounceEvent::Started, 0, 0, u64::MAX), common::NOW).unwrap();
    tracker.handle_announce_at(common::announce_request(info_hash, peer_id, AnnounceEvent::None, 0, u64::MAX / 2, 1), common::NOW + 60).unwrap();
    assert_eq!(tracker.get_stats().hit_and_runs, 0);
}

#[test]
fn test_scrape_empty_rejected_before_lookup() {
    let tracker = common::create_test_tracker(common::create_test_config());
    tracker.add_torrent(common::random_info_hash(), 1);

    let query = swarm_tracker::common::common::parse_query(None).unwrap();
    let result = tracker.validate_scrape(&query);
    assert!(matches!(result, Err(TrackerError::MalformedRequest(_))), "Empty scrape should be malformed");

    let result = tracker.handle_scrape(&ScrapeRequest { info_hashes: vec![] });
    assert!(result.is_err(), "Processor should also refuse an empty scrape");
    assert_eq!(tracker.get_stats().scrapes_handled, 0, "No lookup should have happened");
}

#[test]
fn test_scrape_partial_resolution() {
    let tracker = common::create_test_tracker(common::create_test_config());
    let known_a = common::random_info_hash();
    let known_b = common::random_info_hash();
    let unknown = common::random_info_hash();
    tracker.add_torrent(known_a, 1);
    tracker.add_torrent(known_b, 2);

    let files = tracker.handle_scrape(&ScrapeRequest { info_hashes: vec![known_a, unknown, known_b] }).unwrap();
    assert_eq!(files.len(), 2, "Unknown torrent should be omitted");
    assert!(files.contains_key(&known_a));
    assert!(files.contains_key(&known_b));
    assert!(!files.contains_key(&unknown));
}

#[test]
fn test_whitelist_prefix_matching() {
    let mut config = common::create_test_config();
    config.tracker_config.whitelist_enabled = true;
    config.whitelist = vec![String::from("-AZ")];
    let tracker = common::create_test_tracker(config);
    let info_hash = common::random_info_hash();
    tracker.add_torrent(info_hash, 1);

    let azureus = common::client_peer_id(b"-AZ2060-", 1);
    let unknown = common::client_peer_id(b"-XX0001-", 2);

    assert!(tracker.check_whitelist(&azureus));
    assert!(!tracker.check_whitelist(&unknown));
    assert!(tracker.handle_announce_at(common::announce_request(info_hash, azureus, AnnounceEvent::Started, 0, 0, 0), common::NOW).is_ok());
    assert_eq!(
        tracker.handle_announce_at(common::announce_request(info_hash, unknown, AnnounceEvent::Started, 0, 0, 0), common::NOW),
        Err(TrackerError::UnauthorizedClient)
    );
    assert!(tracker.get_peer(&info_hash, &unknown).is_none(), "Rejected client should leave no record");
}

fn announce_sequence(peer_id: PeerId, rounds: u64) -> Vec<(AnnounceEvent, u64, u64, u64, i64)> {
    let mut sequence = Vec::with_capacity(rounds as usize);
    for round in 0..rounds {
        let event = match round {
            0 => AnnounceEvent::Started,
            _ if round == rounds - 1 => AnnounceEvent::Completed,
            _ => AnnounceEvent::None,
        };
        let uploaded = round * 1000 + peer_id.0[19] as u64;
        let downloaded = round * 2000;
        let left = (rounds - 1 - round) * 10;
        sequence.push((event, uploaded, downloaded, left, common::NOW + round as i64 * 30));
    }
    sequence
}

#[test]
fn test_concurrent_announces_match_serial_execution() {
    const PEERS: u8 = 8;
    const ROUNDS: u64 = 200;

    let info_hash = common::random_info_hash();
    let peer_ids: Vec<PeerId> = (0..PEERS).map(|n| common::client_peer_id(b"-TR4040-", n)).collect();

    let serial = common::create_test_tracker(common::create_test_config());
    serial.add_torrent(info_hash, 1);
    for peer_id in &peer_ids {
        for (event, uploaded, downloaded, left, now) in announce_sequence(*peer_id, ROUNDS) {
            serial.handle_announce_at(common::announce_request(info_hash, *peer_id, event, uploaded, downloaded, left), now).unwrap();
        }
    }

    let concurrent = common::create_test_tracker(common::create_test_config());
    concurrent.add_torrent(info_hash, 1);
    std::thread::scope(|scope| {
        for peer_id in &peer_ids {
            let tracker = &concurrent;
            scope.spawn(move || {
                for (event, uploaded, downloaded, left, now) in announce_sequence(*peer_id, ROUNDS) {
                    tracker.handle_announce_at(common::announce_request(info_hash, *peer_id, event, uploaded, downloaded, left), now).unwrap();
                }
            });
        }
    });

    for peer_id in &peer_ids {
        assert_eq!(
            concurrent.get_peer(&info_hash, peer_id),
            serial.get_peer(&info_hash, peer_id),
            "Peer {} diverged from serial execution", peer_id
        );
    }
    let torrent = concurrent.get_torrent(&info_hash).unwrap();
    assert_eq!(torrent.completed(), PEERS as u64, "Every peer completed once");
    assert_eq!(concurrent.get_stats().peers, PEERS as i64);
    assert_eq!(concurrent.get_stats().announces_handled, PEERS as i64 * ROUNDS as i64);
    assert_eq!(concurrent.get_stats().uploaded, serial.get_stats().uploaded);
}

#[test]
fn test_find_peer_across_torrents() {
    let tracker = common::create_test_tracker(common::create_test_config());
    let peer_id = common::random_peer_id();
    let hashes = [common::random_info_hash(), common::random_info_hash()];
    for (i, info_hash) in hashes.iter().enumerate() {
        tracker.add_torrent(*info_hash, i as u64);
        tracker.handle_announce_at(common::announce_request(*info_hash, peer_id, AnnounceEvent::Started, 0, 0, 0), common::NOW).unwrap();
    }
    assert_eq!(tracker.find_peer(&peer_id).len(), 2);

    tracker.remove_torrent(&hashes[0]);
    let found = tracker.find_peer(&peer_id);
    assert_eq!(found.len(), 1, "Removed torrent should drop its peers from the index");
    assert_eq!(found[0].info_hash, hashes[1]);
    assert_eq!(tracker.get_stats().torrents, 1);
    assert_eq!(tracker.get_stats().peers, 1);
}
