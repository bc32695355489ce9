//! The compiled binary

use anyhow::Result;
use predicates::prelude::*;
use templ_heroicons::icon::IconStyle;
use templ_heroicons::test_utils::{OUTLINE_BARS_3, SOLID_BARS_3};

use crate::common::TestProject;

async fn project_with_icons() -> Result<TestProject> {
    let project = TestProject::new().await?;
    project.add_source("views/nav.templ", "@heroicons.Outline_bars_3")?;
    project.add_source(
        "views/menu.go",
        "var _ = heroicons.Solid_bars_3 // @heroicons.Solid_bars_3",
    )?;
    project.serve_catalog(&["bars-3"], &["bars-3"]).await;
    project.serve_icon(IconStyle::Outline, "bars-3", OUTLINE_BARS_3, None).await;
    project.serve_icon(IconStyle::Solid, "bars-3", SOLID_BARS_3, None).await;
    Ok(project)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_default_run_writes_output() -> Result<()> {
    let project = project_with_icons().await?;

    project
        .run_cli(&[])?
        .success()
        .stdout(predicate::str::contains("Found 2 unique icon(s)"))
        .stdout(predicate::str::contains("Created"));

    let written = std::fs::read_to_string(project.output_file())?;
    assert!(written.contains("templ Outline_Bars_3("));
    assert!(written.contains("templ Solid_Bars_3("));

    project
        .run_cli(&[])?
        .success()
        .stdout(predicate::str::contains("up to date"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dry_run_prints_document() -> Result<()> {
    let project = project_with_icons().await?;

    project
        .run_cli(&["--dry-run"])?
        .success()
        .stdout(predicate::str::contains("--- Dry Run: Would generate"))
        .stdout(predicate::str::contains("package heroicons"))
        .stdout(predicate::str::contains("--- End Dry Run ---"));

    assert!(!project.output_file().exists());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_quiet_run_prints_nothing() -> Result<()> {
    let project = project_with_icons().await?;

    project.run_cli(&["--quiet"])?.success().stdout(predicate::str::is_empty());
    assert!(project.output_file().is_file());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_custom_directories_and_class() -> Result<()> {
    let project = project_with_icons().await?;

    project
        .run_cli(&["-i", "views", "-o", "web/icons", "--default-class", "w-4 h-4"])?
        .success();

    let written = std::fs::read_to_string(project.root().join("web/icons/heroicons.templ"))?;
    assert!(written.contains("\npackage icons\n"));
    assert!(written.contains("\"class\": \"w-4 h-4\","));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_no_icons_succeeds() -> Result<()> {
    let project = TestProject::new().await?;
    project.add_source("page.templ", "templ Page() {}")?;

    project
        .run_cli(&[])?
        .success()
        .stdout(predicate::str::contains("No icon references found."));

    let written = std::fs::read_to_string(project.output_file())?;
    assert!(written.contains("No icons were referenced"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_input_dir_fails() -> Result<()> {
    let project = TestProject::new().await?;

    project
        .run_cli(&["--input-dir", "does-not-exist"])?
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does-not-exist"))
        .stderr(predicate::str::contains("--input-dir"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unresolvable_icons_fail() -> Result<()> {
    let project = TestProject::new().await?;
    project.add_source("page.templ", "@heroicons.Outline_bars_3")?;
    project.serve_catalog(&["bars-3"], &[]).await;
    project.fail_icon(IconStyle::Outline, "bars-3", 404).await;

    project.run_cli(&[])?.failure().code(1);
    assert!(!project.output_file().exists());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_quiet_and_verbose_conflict() -> Result<()> {
    let project = TestProject::new().await?;
    project.run_cli(&["--quiet", "--verbose"])?.failure().code(2);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_broken_config_reported() -> Result<()> {
    let project = TestProject::new().await?;
    let bad = project.root().join("bad.toml");
    std::fs::write(&bad, "unknown_setting = true\n")?;

    project
        .run_cli(&["--config", bad.to_str().unwrap()])?
        .failure()
        .stderr(predicate::str::contains("bad.toml"));
    Ok(())
}
