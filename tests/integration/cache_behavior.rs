//! Asset cache reuse across runs

use anyhow::Result;
use templ_heroicons::icon::IconStyle;
use templ_heroicons::test_utils::OUTLINE_BARS_3;

use crate::common::TestProject;

#[tokio::test]
async fn test_second_run_served_from_cache() -> Result<()> {
    let project = TestProject::new().await?;
    project.add_source("page.templ", "@heroicons.Outline_bars_3")?;
    project.serve_catalog(&["bars-3"], &[]).await;
    // One download across both runs
    project.serve_icon(IconStyle::Outline, "bars-3", OUTLINE_BARS_3, Some(1)).await;

    let first = project.generate().await?;
    let mut options = project.options();
    options.force = true;
    let second = project.generate_with(project.config(), options).await?;

    assert_eq!(first.document, second.document);
    let cached: Vec<_> = std::fs::read_dir(project.cache_dir())?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "svg"))
        .collect();
    assert_eq!(cached.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_failed_download_not_cached() -> Result<()> {
    let project = TestProject::new().await?;
    project.add_source("page.templ", "@heroicons.Outline_bars_3")?;
    project.serve_catalog(&["bars-3"], &[]).await;
    project.fail_icon(IconStyle::Outline, "bars-3", 503).await;

    assert!(project.generate().await.is_err());
    let entries = std::fs::read_dir(project.cache_dir())?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "svg"))
        .count();
    assert_eq!(entries, 0);
    Ok(())
}

#[tokio::test]
async fn test_unusable_cache_dir_falls_back_to_network() -> Result<()> {
    let project = TestProject::new().await?;
    project.add_source("page.templ", "@heroicons.Outline_bars_3")?;
    project.serve_catalog(&["bars-3"], &[]).await;
    project.serve_icon(IconStyle::Outline, "bars-3", OUTLINE_BARS_3, Some(2)).await;

    let blocker = project.cache_dir().join("not-a-dir");
    std::fs::write(&blocker, "file")?;
    let mut config = project.config();
    config.cache_dir = blocker.join("cache");

    project.generate_with(config.clone(), project.options()).await?;
    let mut options = project.options();
    options.force = true;
    let report = project.generate_with(config, options).await?;
    assert_eq!(report.resolved.len(), 1);
    Ok(())
}
