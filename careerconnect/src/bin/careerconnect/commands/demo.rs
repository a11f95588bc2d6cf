use anyhow::Result;
use careerconnect::{Directory, NewProfile, Role};

use crate::examples::ExampleGroup;
use crate::output::OutputManager;

pub const EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Scripted Walkthrough",
    commands: &[
        "careerconnect demo                 # Watch the request/accept flow end to end",
        "careerconnect --output json demo   # Feed sections printed as JSON",
        "careerconnect --no-color demo      # Plain text, suitable for piping to a file",
    ],
}];

pub fn handle_demo(output: &OutputManager) -> Result<()> {
    let mut directory = Directory::new();
    run_demo(&mut directory, output)
}

/// The scripted walkthrough: four members meet, connect through requests,
/// publish, engage, and read their feeds.
pub fn run_demo(directory: &mut Directory, output: &OutputManager) -> Result<()> {
    output.heading("CareerConnect Walkthrough");

    output.heading("1. Registering Members");
    let members = [
        (
            "ajohnson",
            "Alice Johnson",
            Role::Engineer {
                specialization: "AI Development".into(),
            },
        ),
        (
            "bwilliams",
            "Bob Williams",
            Role::Doctor {
                medical_field: "Cardiology".into(),
            },
        ),
        (
            "csmith",
            "Clara Smith",
            Role::Artist {
                medium: "Digital Painting".into(),
            },
        ),
        (
            "dlee",
            "David Lee",
            Role::Engineer {
                specialization: "Mechanical Design".into(),
            },
        ),
    ];
    for (username, name, role) in members {
        let profile = directory.register(NewProfile::new(username, "pass123", name, role))?;
        output.bullet(&profile.introduction());
    }

    output.heading("2. Building the Network");
    connect_pair(directory, "ajohnson", "bwilliams", output)?;
    connect_pair(directory, "csmith", "ajohnson", output)?;
    connect_pair(directory, "bwilliams", "dlee", output)?;

    output.heading("3. Publishing Posts");
    for (author, content) in [
        ("ajohnson", "Excited to start a new AI project!"),
        ("bwilliams", "Reminder: heart health matters at every age."),
        ("csmith", "Just finished a new digital painting collection!"),
    ] {
        let id = directory.create_post(author, content)?.id;
        output.bullet(&format!("{} published post #{id}.", display_name(directory, author)));
    }

    output.heading("4. Engagement");
    for (id, commenter, text) in [
        (1, "bwilliams", "Fascinating work, Alice!"),
        (3, "ajohnson", "Beautiful colors, Clara!"),
        (2, "csmith", "Thanks for the reminder, Dr. Williams!"),
    ] {
        directory.add_comment(id, commenter, text)?;
        output.bullet(&format!("{} commented on post #{id}.", display_name(directory, commenter)));
    }
    for id in [1, 1, 3] {
        let likes = directory.like_post(id)?;
        output.bullet(&format!("Post #{id} is up to {likes} like(s)."));
    }

    output.heading("5. News Feeds");
    show_feed(directory, "ajohnson", output)?;
    show_feed(directory, "dlee", output)?;

    output.heading("6. Connections");
    output.subheading(&format!("{}'s Connections", display_name(directory, "ajohnson")));
    for username in directory.connections_of("ajohnson") {
        output.bullet(&format!("@{username} ({})", display_name(directory, username)));
    }

    output.heading("Final Statistics");
    let total_comments: usize = directory.all_posts().iter().map(|post| post.comments.len()).sum();
    let total_likes: u64 = directory.all_posts().iter().map(|post| post.likes).sum();
    output.key_value("Members", &directory.profile_count().to_string());
    output.key_value("Posts", &directory.post_count().to_string());
    output.key_value("Comments", &total_comments.to_string());
    output.key_value("Likes", &total_likes.to_string());

    output.success("Walkthrough completed successfully!");
    Ok(())
}

fn connect_pair(directory: &mut Directory, from: &str, to: &str, output: &OutputManager) -> Result<()> {
    directory.send_request(from, to)?;
    output.bullet(&format!(
        "{} sent a connection request to {}.",
        display_name(directory, from),
        display_name(directory, to)
    ));
    directory.accept_request(to, from)?;
    output.bullet(&format!(
        "{} accepted. {} and {} are now connected.",
        display_name(directory, to),
        display_name(directory, from),
        display_name(directory, to)
    ));
    Ok(())
}

fn show_feed(directory: &Directory, username: &str, output: &OutputManager) -> Result<()> {
    output.subheading(&format!("{}'s News Feed", display_name(directory, username)));
    let feed = directory.news_feed(username)?;
    if feed.is_empty() {
        output.info("No posts to show. Connect with people to see their posts!");
    } else if output.is_json() {
        output.json(&feed)?;
    } else {
        for post in feed {
            output.post_block(post);
        }
    }
    Ok(())
}

fn display_name(directory: &Directory, username: &str) -> String {
    directory
        .find_user(username)
        .map(|profile| profile.display_name.clone())
        .unwrap_or_else(|| username.to_string())
}
