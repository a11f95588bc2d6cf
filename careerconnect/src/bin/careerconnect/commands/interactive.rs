use std::path::PathBuf;

use anyhow::Result;
use careerconnect::{Directory, DirectoryError, NewProfile, PostId, Role};
use clap::Args;

use crate::examples::ExampleGroup;
use crate::output::OutputManager;
use crate::prompt::{self, Choice};
use crate::seed;

pub const EXAMPLES: &[ExampleGroup] = &[
    ExampleGroup {
        title: "Start a Session",
        commands: &[
            "careerconnect                              # Sample accounts jdoe and asmith are preloaded",
            "careerconnect interactive --empty          # Start with no profiles at all",
        ],
    },
    ExampleGroup {
        title: "Seed Files",
        commands: &[
            "careerconnect interactive --seed-file team.toml",
            "CAREERCONNECT_SEED_FILE=team.toml careerconnect interactive",
        ],
    },
    ExampleGroup {
        title: "Output Control",
        commands: &[
            "careerconnect -q interactive               # Errors only",
            "careerconnect --output json interactive    # Feeds and search results as JSON",
        ],
    },
];

#[derive(Args)]
pub struct InteractiveArgs {
    /// Start with an empty directory instead of the built-in sample accounts
    #[arg(long)]
    pub empty: bool,

    /// Load starter profiles and posts from a TOML seed file
    #[arg(long, value_name = "PATH", env = "CAREERCONNECT_SEED_FILE", conflicts_with = "empty")]
    pub seed_file: Option<PathBuf>,
}

impl InteractiveArgs {
    /// Args for a bare invocation with no subcommand. The seed-file
    /// environment variable applies just as it does for `interactive`.
    pub fn from_env() -> Self {
        Self {
            empty: false,
            seed_file: std::env::var_os("CAREERCONNECT_SEED_FILE").map(PathBuf::from),
        }
    }
}

/// The logged-in member. Display name is cached because profiles are
/// immutable after registration.
struct Session {
    username: String,
    display_name: String,
}

pub fn handle_interactive(args: InteractiveArgs, output: &OutputManager) -> Result<()> {
    let mut directory = Directory::new();

    if let Some(path) = &args.seed_file {
        let counts = seed::apply_file(&mut directory, path)?;
        output.verbose(&format!(
            "seeded {} profiles and {} posts from {}",
            counts.profiles,
            counts.posts,
            path.display()
        ));
    } else if !args.empty {
        let counts = seed::apply_builtin(&mut directory)?;
        output.verbose(&format!("seeded {} sample profiles", counts.profiles));
    }

    output.heading("Welcome to CareerConnect!");
    main_menu(&mut directory, output)
}

fn main_menu(directory: &mut Directory, output: &OutputManager) -> Result<()> {
    loop {
        output.heading("CareerConnect Main Menu");
        output.bullet("1. Register");
        output.bullet("2. Login");
        output.bullet("3. Exit");

        match prompt::read_choice("Enter your choice")? {
            Choice::Picked(1) => register_flow(directory, output)?,
            Choice::Picked(2) => login_flow(directory, output)?,
            Choice::Picked(3) | Choice::Eof => {
                output.info("Exiting CareerConnect. Goodbye!");
                return Ok(());
            }
            _ => output.warning("Invalid choice. Please try again."),
        }
    }
}

// ========== Registration & Login ==========

fn register_flow(directory: &mut Directory, output: &OutputManager) -> Result<()> {
    output.subheading("Create Your Profile");
    output.bullet("1. Student");
    output.bullet("2. Professional");
    output.bullet("3. Engineer");
    output.bullet("4. Doctor");
    output.bullet("5. Artist");

    let role_choice = match prompt::read_choice("Select a role")? {
        Choice::Picked(choice @ 1..=5) => choice,
        Choice::Eof => return Ok(()),
        _ => {
            output.warning("Invalid choice. Please try again.");
            return Ok(());
        }
    };

    let Some(username) = prompt::read_line("Enter username")? else {
        return Ok(());
    };
    let Some(password) = prompt::read_line("Enter password")? else {
        return Ok(());
    };
    let Some(display_name) = prompt::read_line("Enter your full name")? else {
        return Ok(());
    };

    let Some(role) = prompt_role_details(role_choice)? else {
        return Ok(());
    };

    match directory.register(NewProfile::new(username, password, display_name, role)) {
        Ok(_) => output.success("Registration successful! You can now log in."),
        Err(DirectoryError::UsernameTaken { .. }) => {
            output.error("Username already exists. Please try another.");
        }
        Err(DirectoryError::Validation(validation)) => {
            output.error("Registration failed:");
            for issue in &validation.issues {
                output.bullet(&format!("{}: {}", issue.field, issue.message));
            }
        }
        Err(err) => output.error(&err.to_string()),
    }
    Ok(())
}

fn prompt_role_details(choice: usize) -> Result<Option<Role>> {
    let role = match choice {
        1 => {
            let Some(university) = prompt::read_line("Enter your university")? else {
                return Ok(None);
            };
            let Some(major) = prompt::read_line("Enter your major")? else {
                return Ok(None);
            };
            Role::Student { university, major }
        }
        2 => {
            let Some(company) = prompt::read_line("Enter your company")? else {
                return Ok(None);
            };
            let Some(title) = prompt::read_line("Enter your job title")? else {
                return Ok(None);
            };
            Role::Professional { company, title }
        }
        3 => {
            let Some(specialization) = prompt::read_line("Enter your specialization")? else {
                return Ok(None);
            };
            Role::Engineer { specialization }
        }
        4 => {
            let Some(medical_field) = prompt::read_line("Enter your medical field")? else {
                return Ok(None);
            };
            Role::Doctor { medical_field }
        }
        _ => {
            let Some(medium) = prompt::read_line("Enter your primary medium")? else {
                return Ok(None);
            };
            Role::Artist { medium }
        }
    };
    Ok(Some(role))
}

fn login_flow(directory: &mut Directory, output: &OutputManager) -> Result<()> {
    let Some(username) = prompt::read_line("Enter username")? else {
        return Ok(());
    };
    let Some(password) = prompt::read_line("Enter password")? else {
        return Ok(());
    };

    let session = match directory.login(&username, &password) {
        Ok(profile) => Session {
            username: profile.username.clone(),
            display_name: profile.display_name.clone(),
        },
        Err(_) => {
            output.error("Invalid username or password.");
            return Ok(());
        }
    };

    output.success("Login successful!");
    session_menu(directory, &session, output)
}

// ========== Logged-in Session ==========

fn session_menu(directory: &mut Directory, session: &Session, output: &OutputManager) -> Result<()> {
    loop {
        output.heading(&format!("Welcome, {}!", session.display_name));
        output.bullet("1. View My Profile");
        output.bullet("2. View News Feed");
        output.bullet("3. Browse All Posts");
        output.bullet("4. Create a Post");
        output.bullet("5. Like a Post");
        output.bullet("6. Comment on a Post");
        output.bullet("7. Search for Users");
        output.bullet("8. View All Profiles");
        output.bullet("9. Send Connection Request");
        output.bullet("10. View Connection Requests");
        output.bullet("11. Accept Connection Request");
        output.bullet("12. Logout");

        match prompt::read_choice("Enter your choice")? {
            Choice::Picked(1) => view_profile(directory, session, output),
            Choice::Picked(2) => view_feed(directory, session, output)?,
            Choice::Picked(3) => browse_posts(directory, output)?,
            Choice::Picked(4) => create_post(directory, session, output)?,
            Choice::Picked(5) => like_post(directory, output)?,
            Choice::Picked(6) => comment_on_post(directory, session, output)?,
            Choice::Picked(7) => search_users(directory, output)?,
            Choice::Picked(8) => view_all_profiles(directory, output)?,
            Choice::Picked(9) => send_request(directory, session, output)?,
            Choice::Picked(10) => view_requests(directory, session, output),
            Choice::Picked(11) => accept_request(directory, session, output)?,
            Choice::Picked(12) | Choice::Eof => {
                output.info("Logging out...");
                return Ok(());
            }
            _ => output.warning("Invalid choice. Please try again."),
        }
    }
}

fn view_profile(directory: &Directory, session: &Session, output: &OutputManager) {
    let Some(profile) = directory.find_user(&session.username) else {
        return;
    };
    output.subheading(&format!("{} Profile", profile.role.label()));
    output.key_value("Name", &profile.display_name);
    output.key_value("Username", &format!("@{}", profile.username));
    for (label, value) in profile.role.attributes() {
        output.key_value(label, value);
    }
    let connections = directory.connections_of(&session.username);
    output.key_value("Connections", &connections.len().to_string());
    if !connections.is_empty() {
        output.bullet(&format!("Connected with: {}", connections.join(", ")));
    }
}

fn view_feed(directory: &Directory, session: &Session, output: &OutputManager) -> Result<()> {
    output.subheading("Your News Feed");
    let feed = match directory.news_feed(&session.username) {
        Ok(feed) => feed,
        Err(err) => {
            output.error(&err.to_string());
            return Ok(());
        }
    };
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

fn browse_posts(directory: &Directory, output: &OutputManager) -> Result<()> {
    output.subheading("All Posts");
    let posts = directory.all_posts();
    if posts.is_empty() {
        output.info("No posts have been published yet.");
    } else if output.is_json() {
        output.json(&posts)?;
    } else {
        for post in posts {
            output.post_block(post);
        }
    }
    Ok(())
}

fn create_post(directory: &mut Directory, session: &Session, output: &OutputManager) -> Result<()> {
    let Some(content) = prompt::read_line("What's on your mind?")? else {
        return Ok(());
    };
    match directory.create_post(&session.username, &content) {
        Ok(post) => {
            let id = post.id;
            output.success(&format!("Post #{id} created successfully!"));
        }
        Err(err) => output.error(&err.to_string()),
    }
    Ok(())
}

fn like_post(directory: &mut Directory, output: &OutputManager) -> Result<()> {
    let Some(id) = prompt_post_id(output)? else {
        return Ok(());
    };
    match directory.like_post(id) {
        Ok(1) => output.success(&format!("Post #{id} now has 1 like.")),
        Ok(likes) => output.success(&format!("Post #{id} now has {likes} likes.")),
        Err(_) => output.error(&format!("Post with ID {id} not found.")),
    }
    Ok(())
}

fn comment_on_post(directory: &mut Directory, session: &Session, output: &OutputManager) -> Result<()> {
    let Some(id) = prompt_post_id(output)? else {
        return Ok(());
    };
    let Some(content) = prompt::read_line("Enter your comment")? else {
        return Ok(());
    };
    match directory.add_comment(id, &session.username, &content) {
        Ok(()) => output.success(&format!("Comment added to post #{id}.")),
        Err(DirectoryError::PostNotFound { .. }) => {
            output.error(&format!("Post with ID {id} not found."));
        }
        Err(err) => output.error(&err.to_string()),
    }
    Ok(())
}

/// Reads a post id, warning on non-numeric input. `None` covers both EOF
/// and bad input; the caller just returns to the menu.
fn prompt_post_id(output: &OutputManager) -> Result<Option<PostId>> {
    let Some(input) = prompt::read_line("Enter the post ID")? else {
        return Ok(None);
    };
    match input.parse::<PostId>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            output.warning("Post IDs are numbers; try 'Browse All Posts' to find one.");
            Ok(None)
        }
    }
}

// ========== Search & Discovery ==========

fn search_users(directory: &Directory, output: &OutputManager) -> Result<()> {
    let Some(query) = prompt::read_line("Enter a name or username to search")? else {
        return Ok(());
    };
    let results = directory.search_users(&query);
    output.subheading("Search Results");
    if results.is_empty() {
        output.warning("No users found matching your query.");
    } else if output.is_json() {
        output.json(&results)?;
    } else if output.is_compact() {
        for profile in results {
            output.bullet(&format!("@{} ({})", profile.username, profile.display_name));
        }
    } else {
        let mut table = output.create_table();
        output.add_table_header(&mut table, vec!["Username", "Name", "Role"]);
        for profile in results {
            table.add_row(vec![
                format!("@{}", profile.username),
                profile.display_name.clone(),
                profile.role.label().to_string(),
            ]);
        }
        println!("{table}");
    }
    Ok(())
}

fn view_all_profiles(directory: &Directory, output: &OutputManager) -> Result<()> {
    output.subheading("All Profiles");
    let profiles: Vec<_> = directory.profiles().collect();
    if profiles.is_empty() {
        output.info("Nobody has registered yet.");
    } else if output.is_json() {
        output.json(&profiles)?;
    } else if output.is_compact() {
        for profile in profiles {
            output.bullet(&format!(
                "@{} ({}, {})",
                profile.username,
                profile.display_name,
                profile.role.label()
            ));
        }
    } else {
        let mut table = output.create_table();
        output.add_table_header(&mut table, vec!["Username", "Name", "Role", "Details", "Connections"]);
        for profile in profiles {
            let details: Vec<String> = profile
                .role
                .attributes()
                .iter()
                .map(|(label, value)| format!("{label}: {value}"))
                .collect();
            table.add_row(vec![
                format!("@{}", profile.username),
                profile.display_name.clone(),
                profile.role.label().to_string(),
                details.join(", "),
                directory.connections_of(&profile.username).len().to_string(),
            ]);
        }
        println!("{table}");
    }
    Ok(())
}

// ========== Connections ==========

fn send_request(directory: &mut Directory, session: &Session, output: &OutputManager) -> Result<()> {
    let Some(target) = prompt::read_line("Enter the username to connect with")? else {
        return Ok(());
    };
    match directory.send_request(&session.username, &target) {
        Ok(()) => output.success(&format!("Connection request sent to {target}.")),
        Err(DirectoryError::DuplicateRequest { .. }) => {
            output.warning(&format!("You have already sent a request to {target}."));
        }
        Err(DirectoryError::UserNotFound { .. } | DirectoryError::SelfConnection) => {
            output.error("User not found or you cannot connect with yourself.");
        }
        Err(err) => output.error(&err.to_string()),
    }
    Ok(())
}

fn view_requests(directory: &Directory, session: &Session, output: &OutputManager) {
    output.subheading("Pending Connection Requests");
    let requests = directory.pending_requests(&session.username);
    if requests.is_empty() {
        output.info("You have no pending connection requests.");
        return;
    }
    for sender in requests {
        let name = directory
            .find_user(sender)
            .map(|profile| profile.display_name.clone())
            .unwrap_or_else(|| sender.clone());
        output.bullet(&format!("@{sender} ({name})"));
    }
}

fn accept_request(directory: &mut Directory, session: &Session, output: &OutputManager) -> Result<()> {
    let Some(requester) = prompt::read_line("Enter the username whose request to accept")? else {
        return Ok(());
    };
    match directory.accept_request(&session.username, &requester) {
        Ok(()) => output.success(&format!("You are now connected with {requester}.")),
        Err(DirectoryError::RequestNotFound { .. }) => {
            output.error(&format!("No connection request found from {requester}."));
        }
        Err(err) => output.error(&err.to_string()),
    }
    Ok(())
}
