//! Output file handling and package naming

use anyhow::Result;
use std::time::{Duration, SystemTime};
use templ_heroicons::icon::IconStyle;
use templ_heroicons::output::WriteOutcome;
use templ_heroicons::test_utils::OUTLINE_BARS_3;

use crate::common::TestProject;

fn modified(path: &std::path::Path) -> SystemTime {
    std::fs::metadata(path).unwrap().modified().unwrap()
}

async fn project_with_bars() -> Result<TestProject> {
    let project = TestProject::new().await?;
    project.add_source("page.templ", "@heroicons.Outline_bars_3")?;
    project.serve_catalog(&["bars-3"], &[]).await;
    project.serve_icon(IconStyle::Outline, "bars-3", OUTLINE_BARS_3, None).await;
    Ok(project)
}

#[tokio::test]
async fn test_identical_rerun_does_not_touch_file() -> Result<()> {
    let project = project_with_bars().await?;

    let first = project.generate().await?;
    assert_eq!(first.outcome, WriteOutcome::Created);
    let before = modified(&project.output_file());

    tokio::time::sleep(Duration::from_millis(20)).await;
    let second = project.generate().await?;
    assert_eq!(second.outcome, WriteOutcome::Unchanged);
    assert_eq!(modified(&project.output_file()), before);
    Ok(())
}

#[tokio::test]
async fn test_force_rewrites_identical_file() -> Result<()> {
    let project = project_with_bars().await?;
    project.generate().await?;

    let mut options = project.options();
    options.force = true;
    let report = project.generate_with(project.config(), options).await?;
    assert_eq!(report.outcome, WriteOutcome::Updated);
    Ok(())
}

#[tokio::test]
async fn test_config_change_updates_file() -> Result<()> {
    let project = project_with_bars().await?;
    project.generate().await?;

    let mut config = project.config();
    config.default_class = "size-5".to_string();
    let report = project.generate_with(config, project.options()).await?;
    assert_eq!(report.outcome, WriteOutcome::Updated);
    assert!(std::fs::read_to_string(project.output_file())?.contains("\"class\": \"size-5\","));
    Ok(())
}

#[tokio::test]
async fn test_invalid_directory_name_uses_fallback_package() -> Result<()> {
    let project = project_with_bars().await?;
    let mut options = project.options();
    options.output_dir = project.root().join("ui/my-icons");

    let report = project.generate_with(project.config(), options).await?;
    assert_eq!(report.package_name, "heroicons");
    assert_eq!(report.output_path, project.root().join("ui/my-icons/heroicons.templ"));
    assert!(report.document.contains("\npackage heroicons\n"));
    Ok(())
}

#[tokio::test]
async fn test_directory_name_becomes_package() -> Result<()> {
    let project = project_with_bars().await?;
    let mut options = project.options();
    options.output_dir = project.root().join("web/icons");

    let report = project.generate_with(project.config(), options).await?;
    assert_eq!(report.package_name, "icons");
    assert!(project.root().join("web/icons/heroicons.templ").is_file());
    Ok(())
}

#[tokio::test]
async fn test_dry_run_writes_nothing() -> Result<()> {
    let project = project_with_bars().await?;
    let mut options = project.options();
    options.dry_run = true;

    let report = project.generate_with(project.config(), options).await?;
    assert_eq!(report.outcome, WriteOutcome::Previewed);
    assert!(report.document.contains("templ Outline_Bars_3("));
    assert!(!project.output_dir().exists());
    Ok(())
}
