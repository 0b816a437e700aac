use super::*;
use serde_json::json;

#[test]
fn status_enums_use_lowercase_wire_values() {
    assert_eq!(
        serde_json::to_value(PostStatus::Published).expect("serialize"),
        json!("published")
    );
    assert_eq!(
        serde_json::to_value(AppointmentStatus::Confirmed).expect("serialize"),
        json!("confirmed")
    );
    assert_eq!(
        serde_json::from_value::<TestimonialStatus>(json!("approved")).expect("deserialize"),
        TestimonialStatus::Approved
    );
    assert!(serde_json::from_value::<PostStatus>(json!("Published")).is_err());
}

#[test]
fn project_deserializes_from_backend_shape() {
    let project: Project = serde_json::from_value(json!({
        "id": "664f1c2e9b1d8a0012345678",
        "title": "Portfolio",
        "slug": "portfolio",
        "description": "Personal site",
        "technologies": ["rust"],
        "repositoryUrl": null,
        "liveUrl": "https://example.com",
        "coverImage": null,
        "featured": true,
        "createdAt": "2024-05-01T12:00:00Z",
        "updatedAt": "2024-05-02T12:00:00Z"
    }))
    .expect("project");
    assert_eq!(project.slug, "portfolio");
    assert!(project.featured);
    assert_eq!(project.live_url.as_deref(), Some("https://example.com"));
}

#[test]
fn project_defaults_optional_collections() {
    let project: Project = serde_json::from_value(json!({
        "id": "1",
        "title": "t",
        "slug": "t",
        "description": "d",
        "repositoryUrl": null,
        "liveUrl": null,
        "coverImage": null,
        "createdAt": "2024-05-01T12:00:00Z",
        "updatedAt": "2024-05-01T12:00:00Z"
    }))
    .expect("project");
    assert!(project.technologies.is_empty());
    assert!(!project.featured);
}
