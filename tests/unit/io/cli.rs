//! Tests for command-line parsing and session orchestration

#[cfg(test)]
mod tests {
    use crate::write_image;
    use clap::Parser;
    use outfit_roulette::OutfitError;
    use outfit_roulette::io::cli::{Cli, OutfitSession};
    use outfit_roulette::io::configuration::DEFAULT_OUTFIT_COUNT;
    use outfit_roulette::outfit::toggles::ToggleState;
    use outfit_roulette::wardrobe::{AliasTable, Category};
    use std::path::{Path, PathBuf};

    fn wardrobe_tree(root: &Path) {
        write_image(&root.join("Closet/Top/shirt.png"), 4, 4, [200, 0, 0, 255]);
        write_image(&root.join("Closet/Bottom/jeans.png"), 4, 4, [0, 0, 200, 255]);
        write_image(&root.join("Closet/Shoes/boots.png"), 4, 4, [90, 60, 0, 255]);
        write_image(&root.join("Closet/Layer/coat.png"), 4, 4, [0, 90, 0, 255]);
    }

    // Tests parsing with no arguments uses the default switches
    // Verified by changing the default layer position
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.count, DEFAULT_OUTFIT_COUNT);
        assert_eq!(cli.seed, None);
        assert!(cli.overrides().is_empty());
        assert_eq!(cli.toggle_state(), ToggleState::default());
        assert!(cli.should_show_progress());
    }

    // Tests switch flags become toggle events
    // Verified by setting fields directly without exclusivity
    #[test]
    fn test_cli_toggle_flags() {
        let cli = Cli::parse_from(["program", "--no-layer", "--short-bottom", "--short-top"]);
        let state = cli.toggle_state();

        assert!(!state.layer_enabled);
        assert!(state.short_top_enabled);
        assert!(state.short_bottom_enabled);
        assert!(!state.button_up_enabled);
    }

    // Tests button-up flag wins over short-top flag
    // Verified by applying button-up before short-top
    #[test]
    fn test_cli_button_up_beats_short_top() {
        let cli = Cli::parse_from(["program", "--short-top", "--button-up"]);
        let state = cli.toggle_state();

        assert!(state.button_up_enabled);
        assert!(!state.short_top_enabled);
    }

    // Tests manual folder flags map to their categories
    // Verified by swapping the short-top and button-up mappings
    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "program",
            "--top",
            "/t",
            "--short-top-dir",
            "/st",
            "--button-up-dir",
            "/bu",
        ]);

        assert_eq!(
            cli.overrides(),
            vec![
                (Category::Top, Path::new("/t")),
                (Category::ShortTop, Path::new("/st")),
                (Category::ButtonUp, Path::new("/bu")),
            ]
        );
    }

    // Tests zero outfits is rejected
    // Verified by removing the count check
    #[test]
    fn test_cli_validate_count() {
        let cli = Cli::parse_from(["program", "--count", "0"]);

        assert!(matches!(
            cli.validate(),
            Err(OutfitError::InvalidParameter { parameter: "count", .. })
        ));
    }

    // Tests discovery followed by manual override replacement
    // Verified by applying overrides before the search
    #[test]
    fn test_session_discover_with_override() {
        let dir = tempfile::tempdir().ok();
        let Some(dir) = dir else { return };
        wardrobe_tree(dir.path());
        let manual = dir.path().join("Elsewhere");

        let cli = Cli::parse_from([
            PathBuf::from("program"),
            PathBuf::from("--quiet"),
            PathBuf::from("--shoes"),
            manual.clone(),
        ]);
        let session = OutfitSession::with_search(
            cli,
            vec![dir.path().to_path_buf()],
            AliasTable::default(),
            3,
        );

        let wardrobe = session.discover();

        assert_eq!(
            wardrobe.folder(Category::Top),
            Some(dir.path().join("Closet/Top").as_path())
        );
        assert_eq!(wardrobe.folder(Category::Shoes), Some(manual.as_path()));
    }

    // Tests a full run reports folders and writes thumbnails
    // Verified by skipping thumbnail export
    #[test]
    fn test_session_run_renders_outfit() {
        let dir = tempfile::tempdir().ok();
        let Some(dir) = dir else { return };
        let closet = dir.path().join("home");
        wardrobe_tree(&closet);
        let out = dir.path().join("out");

        let cli = Cli::parse_from([
            PathBuf::from("program"),
            PathBuf::from("--quiet"),
            PathBuf::from("--seed"),
            PathBuf::from("7"),
            PathBuf::from("--render"),
            out.clone(),
        ]);
        let session =
            OutfitSession::with_search(cli, vec![closet.clone()], AliasTable::default(), 3);

        let mut report = String::new();
        let result = session.run(&mut report);

        assert!(result.is_ok(), "Run should succeed: {result:?}");
        assert!(report.starts_with("Folders:"));
        assert!(report.contains("Outfit 1:"));
        assert!(report.contains("shirt.png"));
        assert!(report.contains("coat.png"));
        assert!(out.join("1_top.png").exists());
        assert!(out.join("1_layer.png").exists());
        assert!(out.join("1_bottom.png").exists());
        assert!(out.join("1_shoes.png").exists());
    }

    // Tests a run without required folders fails naming them and keeps the folder status
    // Verified by building the status only after generation succeeds
    #[test]
    fn test_session_run_missing_folders() {
        let dir = tempfile::tempdir().ok();
        let Some(dir) = dir else { return };
        write_image(&dir.path().join("Top/a.png"), 2, 2, [1, 1, 1, 255]);

        let cli = Cli::parse_from(["program", "--quiet"]);
        let session = OutfitSession::with_search(
            cli,
            vec![dir.path().to_path_buf()],
            AliasTable::default(),
            3,
        );

        let mut report = String::new();
        match session.run(&mut report) {
            Err(err @ OutfitError::MissingRequiredFolder { .. }) => {
                assert_eq!(
                    err.to_string(),
                    "Required folders are missing or invalid: Bottom, Shoes"
                );
            }
            other => unreachable!("Expected missing folder error, got {other:?}"),
        }

        assert!(report.contains(&format!("{:<13} ✓ Top", "Top")));
        assert!(report.contains(&format!("{:<13} ✗ not found", "Bottom")));
        assert!(report.contains(&format!("{:<13} ✗ not found", "Shoes")));
        assert!(!report.contains("Outfit 1:"));
    }

    // Tests invalid arguments stop the run before anything is reported
    // Verified by searching folders before validating the count
    #[test]
    fn test_session_run_invalid_count() {
        let cli = Cli::parse_from(["program", "--quiet", "--count", "0"]);
        let session = OutfitSession::with_search(cli, Vec::new(), AliasTable::default(), 3);

        let mut report = String::new();

        assert!(matches!(
            session.run(&mut report),
            Err(OutfitError::InvalidParameter { .. })
        ));
        assert!(report.is_empty());
    }
}
