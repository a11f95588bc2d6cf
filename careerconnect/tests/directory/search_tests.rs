use super::support::*;

fn search_directory() -> Directory {
    let mut directory = Directory::new();
    directory.register(professional("jdoe", "John Doe")).expect("jdoe");
    directory.register(student("asmith", "Alice Smith")).expect("asmith");
    directory.register(artist("cmonet", "Claude Monet")).expect("cmonet");
    directory
}

#[test]
fn queries_match_usernames_and_display_names() {
    let directory = search_directory();

    // Username substring.
    let results: Vec<_> = directory.search_users("smith").iter().map(|p| p.username.as_str()).collect();
    assert_eq!(results, ["asmith"]);

    // Display-name substring; the username spells it lowercase.
    let results: Vec<_> = directory.search_users("Smith").iter().map(|p| p.username.as_str()).collect();
    assert_eq!(results, ["asmith"]);
}

#[test]
fn matching_is_case_sensitive() {
    let directory = search_directory();
    assert!(directory.search_users("JOHN").is_empty());
    let results: Vec<_> = directory.search_users("John").iter().map(|p| p.username.as_str()).collect();
    assert_eq!(results, ["jdoe"]);
}

#[test]
fn results_come_back_in_username_order() {
    let directory = search_directory();
    let results: Vec<_> = directory.search_users("o").iter().map(|p| p.username.as_str()).collect();
    assert_eq!(results, ["cmonet", "jdoe"]);
}

#[test]
fn the_empty_query_matches_everyone() {
    let directory = search_directory();
    assert_eq!(directory.search_users("").len(), 3);
}

#[test]
fn unmatched_queries_come_back_empty() {
    let directory = search_directory();
    assert!(directory.search_users("zzz").is_empty());
}
