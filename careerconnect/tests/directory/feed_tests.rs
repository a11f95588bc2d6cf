use super::support::*;

#[test]
fn feeds_cover_own_and_connected_posts_in_publication_order() {
    let mut directory = sample_directory();
    connect(&mut directory, "jdoe", "asmith");

    directory.create_post("asmith", "Alice's post").expect("post one");
    directory.create_post("bwilliams", "Bob's post").expect("post two");
    directory.create_post("jdoe", "John's post").expect("post three");

    // John sees Alice's post and his own, in publication order; Bob is a stranger.
    let feed = directory.news_feed("jdoe").expect("john's feed");
    let contents: Vec<_> = feed.iter().map(|post| post.content.as_str()).collect();
    assert_eq!(contents, ["Alice's post", "John's post"]);

    // Bob is connected to nobody and sees only himself.
    let feed = directory.news_feed("bwilliams").expect("bob's feed");
    let contents: Vec<_> = feed.iter().map(|post| post.content.as_str()).collect();
    assert_eq!(contents, ["Bob's post"]);
}

#[test]
fn a_feed_grows_when_a_connection_forms() {
    let mut directory = sample_directory();
    directory.create_post("bwilliams", "Cardiology myths, part 1").expect("post");

    assert!(directory.news_feed("asmith").expect("before connecting").is_empty());

    connect(&mut directory, "asmith", "bwilliams");
    let feed = directory.news_feed("asmith").expect("after connecting");
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].author.username, "bwilliams");
}

#[test]
fn newcomers_start_with_an_empty_feed() {
    let directory = sample_directory();
    assert!(directory.news_feed("asmith").expect("fresh feed").is_empty());
}

#[test]
fn feed_entries_expose_snapshots_with_likes_and_comments() {
    let mut directory = sample_directory();
    connect(&mut directory, "jdoe", "asmith");
    let id = directory.create_post("asmith", "Study group tonight!").expect("post").id;
    directory.like_post(id).expect("like");
    directory.add_comment(id, "jdoe", "Count me in.").expect("comment");

    let feed = directory.news_feed("jdoe").expect("feed");
    let post = feed[0];
    assert_eq!(post.author.role_label, "Student");
    assert_eq!(post.likes, 1);
    assert_eq!(post.comments.len(), 1);
    assert_eq!(post.comments[0].author_name, "John Doe");
}
