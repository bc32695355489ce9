//! Catalog validation during full runs

use anyhow::Result;
use std::time::Duration;
use templ_heroicons::icon::IconStyle;
use templ_heroicons::test_utils::{OUTLINE_BARS_3, SOLID_BARS_3};
use wiremock::ResponseTemplate;

use crate::common::TestProject;

#[tokio::test]
async fn test_unknown_icon_reported_with_suggestions() -> Result<()> {
    let project = TestProject::new().await?;
    project.add_source("page.templ", "@heroicons.Outline_bars_4")?;
    project.serve_catalog(&["bars-2", "bars-3", "bolt"], &[]).await;
    project.serve_icon(IconStyle::Outline, "bars-4", OUTLINE_BARS_3, None).await;

    let report = project.generate().await?;
    assert!(report.catalog_available);
    assert_eq!(report.unknown.len(), 1);

    let (icon, suggestions) = &report.unknown[0];
    assert_eq!(icon.to_string(), "outline/bars-4");
    assert_eq!(suggestions, &["bars-2", "bars-3"]);

    // Unknown icons are still attempted
    assert_eq!(report.resolved.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_catalog_outage_does_not_fail_the_run() -> Result<()> {
    let project = TestProject::new().await?;
    project.add_source("page.templ", "@heroicons.Outline_bars_3 @heroicons.Solid_bars_3")?;
    project.catalog_responds(ResponseTemplate::new(500)).await;
    project.serve_icon(IconStyle::Outline, "bars-3", OUTLINE_BARS_3, None).await;
    project.serve_icon(IconStyle::Solid, "bars-3", SOLID_BARS_3, None).await;

    let report = project.generate().await?;
    assert!(!report.catalog_available);
    assert!(report.unknown.is_empty());
    assert_eq!(report.resolved.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_slow_catalog_times_out_and_run_continues() -> Result<()> {
    let project = TestProject::new().await?;
    project.add_source("page.templ", "@heroicons.Outline_bars_3")?;
    project
        .catalog_responds(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .await;
    project.serve_icon(IconStyle::Outline, "bars-3", OUTLINE_BARS_3, None).await;

    let mut config = project.config();
    config.timeout_secs = 1;
    let report = project.generate_with(config, project.options()).await?;
    assert!(!report.catalog_available);
    assert_eq!(report.resolved.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_validation_can_be_disabled() -> Result<()> {
    let project = TestProject::new().await?;
    project.add_source("page.templ", "@heroicons.Outline_bars_3")?;
    project.serve_icon(IconStyle::Outline, "bars-3", OUTLINE_BARS_3, None).await;

    let mut config = project.config();
    config.validate = false;
    let report = project.generate_with(config, project.options()).await?;
    assert!(!report.catalog_available);
    assert_eq!(report.resolved.len(), 1);

    let requests = project.server.received_requests().await.unwrap_or_default();
    assert!(requests.iter().all(|r| !r.url.path().starts_with("/contents")));
    Ok(())
}
