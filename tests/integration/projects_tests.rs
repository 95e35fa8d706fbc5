use crate::common;
use bugsnag_api::prelude::*;
use chrono::SecondsFormat;
use mockito::Matcher;

const PROJECTS_FIXTURE: &str = include_str!("testdata/list_organizations_projects_response.json");

const ORG_ID: &str = "547c4b0b69196200109ead5c";

#[tokio::test]
async fn test_list_organizations_projects() {
    let (mut server, client) = common::setup().await;

    let mock = server
        .mock("GET", format!("/organizations/{ORG_ID}/projects").as_str())
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(PROJECTS_FIXTURE)
        .create_async()
        .await;

    let (projects, _) = client
        .list_organizations_projects(ORG_ID, None)
        .await
        .expect("listing projects must succeed");

    assert_eq!(projects.len(), 1);
    let project = &projects[0];
    assert_eq!(project.id, "537c4b0b69196200109eac5c");
    assert_eq!(project.organization_id, ORG_ID);
    assert_eq!(project.slug, "example-project");
    assert_eq!(project.name, "Example Project");
    assert_eq!(project.api_key, "2e3b1d5af480d995d80d1536442117d5");
    assert_eq!(project.project_type, "react");
    assert!(project.is_full_view);
    assert_eq!(project.release_stages, vec!["staging", "production"]);
    assert_eq!(project.language, "javascript");
    assert_eq!(
        project.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        "2017-04-24T22:17:13Z"
    );
    assert_eq!(
        project.errors_url,
        "https://api.bugsnag.com/projects/537c4b0b69196200109eac5c/errors"
    );
    assert_eq!(
        project.events_url,
        "https://api.bugsnag.com/projects/537c4b0b69196200109eac5c/events"
    );
    assert_eq!(
        project.url,
        "https://api.bugsnag.com/projects/537c4b0b69196200109eac5c"
    );
    assert_eq!(
        project.html_url,
        "https://app.bugsnag.com/example-account/example-project"
    );
    assert_eq!(project.open_error_count, 1);
    assert_eq!(project.for_review_error_count, 2);
    assert_eq!(project.collaborators_count, 49);
    assert_eq!(project.teams_count, 1);
    assert_eq!(project.custom_event_fields_used, 5);
    assert!(project.global_grouping.is_empty());
    assert!(project.location_grouping.is_empty());
    assert!(project.discarded_app_versions.is_empty());
    assert!(project.discarded_errors.is_empty());
    assert!(!project.resolve_on_deploy);
    assert_eq!(project.url_whitelist, vec!["example.com"]);
    assert!(project.ignore_old_browsers);
    assert!(project.ignored_browser_versions.is_empty());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_projects_encodes_per_page() {
    let (mut server, client) = common::setup().await;

    let mock = server
        .mock("GET", format!("/organizations/{ORG_ID}/projects").as_str())
        .match_query(Matcher::UrlEncoded("per_page".into(), "10".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let opts = ListOrganizationsProjectsOptions::new().with_per_page(10);
    let (projects, _) = client
        .list_organizations_projects(ORG_ID, Some(&opts))
        .await
        .expect("listing projects must succeed");

    assert!(projects.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_next_page_url_is_replayed_verbatim() {
    let (mut server, client) = common::setup().await;

    // the next-page URL carries sort/filter state the client must not rebuild
    let next = Url::parse(&format!(
        "{}/organizations/{ORG_ID}/projects?direction=desc&offset%5Bsort_field_offset%5D=601ac082ec80d80015bc0a85&per_page=30&sort=created_at",
        server.url()
    ))
    .unwrap();

    let mock = server
        .mock("GET", format!("/organizations/{ORG_ID}/projects").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("direction".into(), "desc".into()),
            Matcher::UrlEncoded(
                "offset[sort_field_offset]".into(),
                "601ac082ec80d80015bc0a85".into(),
            ),
            Matcher::UrlEncoded("per_page".into(), "30".into()),
            Matcher::UrlEncoded("sort".into(), "created_at".into()),
        ]))
        .with_status(200)
        .with_body(PROJECTS_FIXTURE)
        .create_async()
        .await;

    // per_page in the options must lose against the next-page URL
    let opts = ListOrganizationsProjectsOptions::new()
        .with_per_page(5)
        .with_next_page_url(next);
    let (projects, _) = client
        .list_organizations_projects(ORG_ID, Some(&opts))
        .await
        .expect("listing projects must succeed");

    assert_eq!(projects.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_pagination_chain_across_pages() {
    let (mut server, client) = common::setup().await;

    let next = format!(
        "{}/organizations/{ORG_ID}/projects?offset=537c4b0b69196200109eac5c&per_page=1",
        server.url()
    );
    let first_page = server
        .mock("GET", format!("/organizations/{ORG_ID}/projects").as_str())
        .match_query(Matcher::Exact("per_page=1".to_string()))
        .with_status(200)
        .with_header("X-Total-Count", "2")
        .with_header("Link", &format!(r#"<{next}>; rel="next""#))
        .with_body(PROJECTS_FIXTURE)
        .create_async()
        .await;
    let second_page = server
        .mock("GET", format!("/organizations/{ORG_ID}/projects").as_str())
        .match_query(Matcher::Exact(
            "offset=537c4b0b69196200109eac5c&per_page=1".to_string(),
        ))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let opts = ListOrganizationsProjectsOptions::new().with_per_page(1);
    let (projects, response) = client
        .list_organizations_projects(ORG_ID, Some(&opts))
        .await
        .expect("first page must succeed");
    assert_eq!(projects.len(), 1);
    assert_eq!(response.total_count, Some(2));

    let next_url = response.next_page_url.expect("next page URL must be present");
    let opts = ListOrganizationsProjectsOptions::new().with_next_page_url(next_url);
    let (projects, response) = client
        .list_organizations_projects(ORG_ID, Some(&opts))
        .await
        .expect("second page must succeed");

    assert!(projects.is_empty());
    assert_eq!(response.next_page_url, None);

    first_page.assert_async().await;
    second_page.assert_async().await;
}
