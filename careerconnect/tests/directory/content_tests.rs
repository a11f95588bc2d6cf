use super::support::*;

#[test]
fn posts_get_sequential_ids_in_publication_order() {
    let mut directory = sample_directory();
    directory.create_post("jdoe", "First!").expect("post one");
    directory.create_post("asmith", "Second!").expect("post two");
    directory.create_post("jdoe", "Third!").expect("post three");

    let ids: Vec<_> = directory.all_posts().iter().map(|post| post.id).collect();
    assert_eq!(ids, [1, 2, 3]);
    let contents: Vec<_> = directory.all_posts().iter().map(|post| post.content.as_str()).collect();
    assert_eq!(contents, ["First!", "Second!", "Third!"]);
}

#[test]
fn posting_requires_a_registered_author() {
    let mut directory = sample_directory();
    let err = directory.create_post("ghost", "Boo!").expect_err("unknown author");
    assert!(matches!(err, DirectoryError::UserNotFound { username } if username == "ghost"));
    assert_eq!(directory.post_count(), 0);
}

#[test]
fn authors_are_captured_by_value_at_publication_time() {
    let mut directory = Directory::new();
    directory
        .register(engineer("dlee", "David Lee", "Mechanical Design"))
        .expect("register dlee");
    let post = directory.create_post("dlee", "Prototype day.").expect("post");
    assert_eq!(post.author.username, "dlee");
    assert_eq!(post.author.display_name, "David Lee");
    assert_eq!(post.author.role_label, "Engineer");
}

#[test]
fn likes_accumulate_one_at_a_time() {
    let mut directory = sample_directory();
    let id = directory.create_post("jdoe", "Like me!").expect("post").id;

    assert_eq!(directory.like_post(id).expect("first like"), 1);
    assert_eq!(directory.like_post(id).expect("second like"), 2);
    assert_eq!(directory.like_post(id).expect("third like"), 3);
    assert_eq!(directory.post(id).expect("post exists").likes, 3);
}

#[test]
fn comments_carry_the_commenters_display_name_in_order() {
    let mut directory = sample_directory();
    let id = directory.create_post("jdoe", "Thoughts?").expect("post").id;

    directory.add_comment(id, "asmith", "Love it.").expect("first comment");
    directory.add_comment(id, "bwilliams", "Same here.").expect("second comment");

    let post = directory.post(id).expect("post exists");
    let commenters: Vec<_> = post.comments.iter().map(|comment| comment.author_name.as_str()).collect();
    assert_eq!(commenters, ["Alice Smith", "Bob Williams"]);
    assert_eq!(post.comments[0].content, "Love it.");
}

#[test]
fn comments_require_a_registered_author() {
    let mut directory = sample_directory();
    let id = directory.create_post("jdoe", "Thoughts?").expect("post").id;

    let err = directory.add_comment(id, "ghost", "Boo!").expect_err("unknown commenter");
    assert!(matches!(err, DirectoryError::UserNotFound { .. }));
    assert!(directory.post(id).expect("post exists").comments.is_empty());
}

#[test]
fn likes_and_comments_on_missing_posts_change_nothing() {
    let mut directory = sample_directory();
    let id = directory.create_post("jdoe", "Only post.").expect("post").id;
    directory.like_post(id).expect("one like");

    let err = directory.like_post(99).expect_err("no post 99");
    assert!(matches!(err, DirectoryError::PostNotFound { id: 99 }));
    let err = directory.add_comment(99, "asmith", "Hello?").expect_err("no post 99");
    assert!(matches!(err, DirectoryError::PostNotFound { id: 99 }));

    assert_eq!(directory.post_count(), 1);
    let post = directory.post(id).expect("post exists");
    assert_eq!(post.likes, 1);
    assert!(post.comments.is_empty());
}
