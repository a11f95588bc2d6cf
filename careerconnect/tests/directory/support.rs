pub(crate) use careerconnect::{Directory, DirectoryError, NewProfile, Role};

pub(crate) fn student(username: &str, display_name: &str) -> NewProfile {
    NewProfile::new(
        username,
        "pass123",
        display_name,
        Role::Student {
            university: "State University".into(),
            major: "Computer Science".into(),
        },
    )
}

pub(crate) fn professional(username: &str, display_name: &str) -> NewProfile {
    NewProfile::new(
        username,
        "pass123",
        display_name,
        Role::Professional {
            company: "Innovate Inc.".into(),
            title: "Software Engineer".into(),
        },
    )
}

pub(crate) fn engineer(username: &str, display_name: &str, specialization: &str) -> NewProfile {
    NewProfile::new(
        username,
        "pass123",
        display_name,
        Role::Engineer {
            specialization: specialization.into(),
        },
    )
}

pub(crate) fn doctor(username: &str, display_name: &str) -> NewProfile {
    NewProfile::new(
        username,
        "pass123",
        display_name,
        Role::Doctor {
            medical_field: "Cardiology".into(),
        },
    )
}

pub(crate) fn artist(username: &str, display_name: &str) -> NewProfile {
    NewProfile::new(
        username,
        "pass123",
        display_name,
        Role::Artist {
            medium: "Watercolor".into(),
        },
    )
}

/// Three members, no connections, no posts.
pub(crate) fn sample_directory() -> Directory {
    let mut directory = Directory::new();
    directory
        .register(professional("jdoe", "John Doe"))
        .expect("register jdoe");
    directory
        .register(student("asmith", "Alice Smith"))
        .expect("register asmith");
    directory
        .register(doctor("bwilliams", "Bob Williams"))
        .expect("register bwilliams");
    directory
}

/// Request plus acceptance, the only way edges come to exist.
pub(crate) fn connect(directory: &mut Directory, from: &str, to: &str) {
    directory.send_request(from, to).expect("send request");
    directory.accept_request(to, from).expect("accept request");
}
