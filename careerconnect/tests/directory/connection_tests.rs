use super::support::*;

#[test]
fn request_then_accept_connects_both_sides() {
    let mut directory = sample_directory();

    directory.send_request("jdoe", "asmith").expect("send request");
    assert_eq!(directory.pending_requests("asmith"), ["jdoe"]);
    assert!(!directory.are_connected("jdoe", "asmith"));

    directory.accept_request("asmith", "jdoe").expect("accept request");
    assert!(directory.pending_requests("asmith").is_empty());
    assert!(directory.are_connected("jdoe", "asmith"));
    assert!(directory.are_connected("asmith", "jdoe"));
    assert_eq!(directory.connections_of("jdoe"), ["asmith"]);
    assert_eq!(directory.connections_of("asmith"), ["jdoe"]);
}

#[test]
fn a_second_identical_request_is_rejected_while_pending() {
    let mut directory = sample_directory();

    directory.send_request("jdoe", "asmith").expect("first request");
    let err = directory.send_request("jdoe", "asmith").expect_err("already pending");
    assert!(
        matches!(err, DirectoryError::DuplicateRequest { from, to } if from == "jdoe" && to == "asmith")
    );
    assert_eq!(directory.pending_requests("asmith").len(), 1);
}

#[test]
fn reverse_requests_coexist_and_the_late_accept_keeps_one_edge() {
    let mut directory = sample_directory();

    directory.send_request("jdoe", "asmith").expect("jdoe asks asmith");
    directory.send_request("asmith", "jdoe").expect("asmith asks jdoe");
    assert_eq!(directory.pending_requests("asmith"), ["jdoe"]);
    assert_eq!(directory.pending_requests("jdoe"), ["asmith"]);

    directory.accept_request("asmith", "jdoe").expect("first accept");
    assert!(directory.are_connected("jdoe", "asmith"));

    // The reverse request is still there; accepting it must not double the edge.
    directory.accept_request("jdoe", "asmith").expect("second accept is a no-op on the edge");
    assert!(directory.pending_requests("jdoe").is_empty());
    assert_eq!(directory.connections_of("jdoe"), ["asmith"]);
    assert_eq!(directory.connections_of("asmith"), ["jdoe"]);
}

#[test]
fn self_requests_are_rejected() {
    let mut directory = sample_directory();
    let err = directory.send_request("jdoe", "jdoe").expect_err("self connection");
    assert!(matches!(err, DirectoryError::SelfConnection));
    assert!(directory.pending_requests("jdoe").is_empty());
}

#[test]
fn requests_to_unknown_users_are_rejected() {
    let mut directory = sample_directory();
    let err = directory.send_request("jdoe", "ghost").expect_err("unknown recipient");
    assert!(matches!(err, DirectoryError::UserNotFound { username } if username == "ghost"));
}

#[test]
fn accepting_without_a_matching_request_fails() {
    let mut directory = sample_directory();

    let err = directory.accept_request("asmith", "jdoe").expect_err("nothing pending");
    assert!(matches!(err, DirectoryError::RequestNotFound { requester } if requester == "jdoe"));

    // A consumed request cannot be accepted twice.
    directory.send_request("jdoe", "asmith").expect("send request");
    directory.accept_request("asmith", "jdoe").expect("accept once");
    let err = directory.accept_request("asmith", "jdoe").expect_err("already consumed");
    assert!(matches!(err, DirectoryError::RequestNotFound { .. }));
}

#[test]
fn accepting_one_request_leaves_the_others_queued() {
    let mut directory = sample_directory();

    directory.send_request("jdoe", "bwilliams").expect("jdoe asks");
    directory.send_request("asmith", "bwilliams").expect("asmith asks");
    assert_eq!(directory.pending_requests("bwilliams"), ["jdoe", "asmith"]);

    directory.accept_request("bwilliams", "asmith").expect("accept the second");
    assert_eq!(directory.pending_requests("bwilliams"), ["jdoe"]);
    assert!(directory.are_connected("bwilliams", "asmith"));
    assert!(!directory.are_connected("bwilliams", "jdoe"));
}

#[test]
fn a_fresh_request_between_connected_members_still_resolves_to_one_edge() {
    let mut directory = sample_directory();
    connect(&mut directory, "jdoe", "asmith");

    // Nothing stops a redundant request; accepting it must not add an edge.
    directory.send_request("jdoe", "asmith").expect("redundant request");
    directory.accept_request("asmith", "jdoe").expect("redundant accept");
    assert_eq!(directory.connections_of("jdoe"), ["asmith"]);
    assert_eq!(directory.connections_of("asmith"), ["jdoe"]);
}

#[test]
fn connections_accumulate_in_acceptance_order() {
    let mut directory = sample_directory();
    connect(&mut directory, "asmith", "jdoe");
    connect(&mut directory, "bwilliams", "jdoe");
    assert_eq!(directory.connections_of("jdoe"), ["asmith", "bwilliams"]);
}
