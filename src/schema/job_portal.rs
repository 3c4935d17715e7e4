//! The online job portal schema

use super::{Attribute, Entity, Relationship, Schema};

pub(super) const TITLE: &str = "Online Job Portal ERD";

pub(super) fn schema() -> Schema {
    let entities = vec![
        Entity::new("User")
            .with(Attribute::primary("UserID"))
            .with_plain(["Name", "Email", "Password", "UserType", "DateCreated"]),
        Entity::new("JobSeeker")
            .with(Attribute::primary("SeekerID").and_foreign())
            .with_plain(["Resume", "Skills", "Experience", "Education"]),
        Entity::new("Employer")
            .with(Attribute::primary("EmployerID").and_foreign())
            .with_plain(["CompanyName", "CompanyDescription", "Industry", "Location"]),
        Entity::new("Job")
            .with(Attribute::primary("JobID"))
            .with(Attribute::foreign("EmployerID"))
            .with_plain([
                "Title",
                "Description",
                "Location",
                "Salary",
                "EmploymentType",
                "PostedDate",
                "Deadline",
            ]),
        Entity::new("Application")
            .with(Attribute::primary("ApplicationID"))
            .with(Attribute::foreign("JobID"))
            .with(Attribute::foreign("SeekerID"))
            .with_plain(["ApplicationDate", "Status"]),
        Entity::new("Message")
            .with(Attribute::primary("MessageID"))
            .with(Attribute::foreign("SenderID"))
            .with(Attribute::foreign("ReceiverID"))
            .with_plain(["MessageText", "Timestamp"]),
        Entity::new("Interview")
            .with(Attribute::primary("InterviewID"))
            .with(Attribute::foreign("ApplicationID"))
            .with_plain(["InterviewDate", "InterviewType", "InterviewStatus"]),
    ];

    // Message points back at User: one edge for sender, one for receiver.
    let relationships = [
        ("User", "JobSeeker"),
        ("User", "Employer"),
        ("Employer", "Job"),
        ("JobSeeker", "Application"),
        ("Job", "Application"),
        ("Application", "Interview"),
        ("User", "Message"),
        ("Message", "User"),
    ]
    .into_iter()
    .map(|(from, to)| Relationship::new(from, to))
    .collect();

    Schema {
        title: Some(TITLE.to_string()),
        entities,
        relationships,
    }
}
