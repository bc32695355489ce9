//! Full pipeline runs

use anyhow::Result;
use templ_heroicons::core::HeroiconsError;
use templ_heroicons::icon::IconStyle;
use templ_heroicons::output::WriteOutcome;
use templ_heroicons::test_utils::{BROKEN_SVG, OUTLINE_BARS_3, OUTLINE_X_MARK, SOLID_BARS_3};

use crate::common::TestProject;

#[tokio::test]
async fn test_generates_components_from_two_files() -> Result<()> {
    let project = TestProject::new().await?;
    project.add_source(
        "views/nav.templ",
        "templ Nav() {\n\t@heroicons.Outline_bars_3(templ.Attributes{})\n}\n",
    )?;
    project.add_source(
        "views/menu.templ",
        "templ Menu() {\n\t@heroicons.Solid_bars_3(nil)\n\t@heroicons.Outline_bars_3(nil)\n}\n",
    )?;
    project.serve_icon(IconStyle::Outline, "bars-3", OUTLINE_BARS_3, Some(1)).await;
    project.serve_icon(IconStyle::Solid, "bars-3", SOLID_BARS_3, Some(1)).await;
    project.serve_catalog(&["bars-3"], &["bars-3"]).await;

    let report = project.generate().await?;

    assert_eq!(report.scan.files_scanned, 2);
    assert_eq!(report.scan.total_references, 3);
    assert_eq!(report.resolved.len(), 2);
    assert!(report.catalog_available);
    assert!(report.unknown.is_empty());
    assert_eq!(report.outcome, WriteOutcome::Created);
    assert_eq!(report.package_name, "heroicons");

    let written = std::fs::read_to_string(project.output_file())?;
    assert_eq!(written, report.document);
    assert!(written.contains("package heroicons\n"));
    assert!(written.contains("/heroicons/{version}/24\n// Version: v2.2.0\n"));
    assert_eq!(written.matches("templ Outline_Bars_3(attrs templ.Attributes) {").count(), 1);
    assert_eq!(written.matches("templ Solid_Bars_3(attrs templ.Attributes) {").count(), 1);
    let outline = written.find("templ Outline_Bars_3(").unwrap();
    let solid = written.find("templ Solid_Bars_3(").unwrap();
    assert!(outline < solid);
    assert!(written.contains("\t\t\t\"stroke-width\": \"1.5\",\n"));
    assert!(written.contains("clip-rule=\"evenodd\""));
    assert!(!written.contains("aria-hidden"));
    Ok(())
}

#[tokio::test]
async fn test_unique_references_span_styles_and_names() -> Result<()> {
    let project = TestProject::new().await?;
    project.add_source(
        "page.templ",
        "@heroicons.Outline_x_mark @heroicons.Outline_bars_3 @heroicons.Outline_x_mark",
    )?;
    project.serve_icon(IconStyle::Outline, "bars-3", OUTLINE_BARS_3, None).await;
    project.serve_icon(IconStyle::Outline, "x-mark", OUTLINE_X_MARK, None).await;
    project.serve_catalog(&["bars-3", "x-mark"], &[]).await;

    let report = project.generate().await?;
    let names: Vec<String> = report.resolved.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["outline/bars-3", "outline/x-mark"]);
    assert_eq!(report.scan.unique_references, 2);
    Ok(())
}

#[tokio::test]
async fn test_failed_icon_is_left_out() -> Result<()> {
    let project = TestProject::new().await?;
    project.add_source(
        "page.templ",
        "@heroicons.Outline_bars_3 @heroicons.Outline_x_mark @heroicons.Solid_bars_3",
    )?;
    project.serve_icon(IconStyle::Outline, "bars-3", OUTLINE_BARS_3, None).await;
    project.fail_icon(IconStyle::Outline, "x-mark", 404).await;
    project.serve_icon(IconStyle::Solid, "bars-3", BROKEN_SVG, None).await;
    project.serve_catalog(&["bars-3", "x-mark"], &["bars-3"]).await;

    let report = project.generate().await?;
    assert_eq!(report.resolved.len(), 1);
    assert_eq!(report.failures.len(), 2);
    assert!(report.document.contains("templ Outline_Bars_3("));
    assert!(!report.document.contains("templ Outline_X_Mark("));
    assert!(!report.document.contains("templ Solid_Bars_3("));
    Ok(())
}

#[tokio::test]
async fn test_nothing_resolved_leaves_existing_output() -> Result<()> {
    let project = TestProject::new().await?;
    project.add_source("page.templ", "@heroicons.Outline_bars_3")?;
    project.fail_icon(IconStyle::Outline, "bars-3", 500).await;
    project.serve_catalog(&["bars-3"], &[]).await;

    std::fs::create_dir_all(project.output_dir())?;
    std::fs::write(project.output_file(), "package heroicons\n// previous\n")?;

    let err = project.generate().await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<HeroiconsError>(),
        Some(HeroiconsError::NoIconsResolved { requested: 1 })
    ));
    assert_eq!(
        std::fs::read_to_string(project.output_file())?,
        "package heroicons\n// previous\n"
    );
    Ok(())
}

#[tokio::test]
async fn test_no_references_writes_empty_document() -> Result<()> {
    let project = TestProject::new().await?;
    project.add_source("page.templ", "templ Page() { <p>no icons</p> }")?;

    let report = project.generate().await?;
    assert!(report.scan.is_empty());
    assert!(!report.catalog_available);
    assert_eq!(report.outcome, WriteOutcome::Created);
    assert!(report.document.contains("package heroicons\n"));
    assert!(report.document.contains("No icons were referenced"));
    assert!(!report.document.contains("(attrs templ.Attributes)"));

    // No request of any kind reached the server
    let requests = project.server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_generated_file_is_not_rescanned() -> Result<()> {
    let project = TestProject::new().await?;
    project.add_source("page.templ", "@heroicons.Outline_bars_3")?;
    project.serve_icon(IconStyle::Outline, "bars-3", OUTLINE_BARS_3, None).await;
    project.serve_icon(IconStyle::Outline, "x-mark", OUTLINE_X_MARK, Some(0)).await;
    project.serve_catalog(&["bars-3", "x-mark"], &[]).await;

    // A stale reference inside the output directory must not count
    project.add_source("components/heroicons/old.templ", "@heroicons.Outline_x_mark")?;

    let report = project.generate().await?;
    assert_eq!(report.resolved.len(), 1);
    assert_eq!(report.scan.files_scanned, 1);
    Ok(())
}

#[tokio::test]
async fn test_output_dir_scanned_when_exclusion_disabled() -> Result<()> {
    let project = TestProject::new().await?;
    project.add_source("page.templ", "@heroicons.Outline_bars_3")?;
    project.add_source("components/heroicons/old.templ", "@heroicons.Outline_x_mark")?;
    project.serve_icon(IconStyle::Outline, "bars-3", OUTLINE_BARS_3, None).await;
    project.serve_icon(IconStyle::Outline, "x-mark", OUTLINE_X_MARK, None).await;
    project.serve_catalog(&["bars-3", "x-mark"], &[]).await;

    let mut options = project.options();
    options.exclude_output = false;
    let report = project.generate_with(project.config(), options).await?;
    assert_eq!(report.resolved.len(), 2);
    Ok(())
}
