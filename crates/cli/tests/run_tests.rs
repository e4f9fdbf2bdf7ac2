#[cfg(test)]
mod tests {
    use clap::Parser;
    use split_cli::cli_args::Args;
    use split_core::error::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_with_prefix_directory() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.txt");
        fs::write(&input, "a\nb\nc\n").unwrap();
        let prefix = dir.path().join("out_").to_string_lossy().to_string();

        let args = Args::parse_from([
            "split",
            "-l",
            "2",
            "--prefix",
            prefix.as_str(),
            input.to_str().unwrap(),
        ]);
        let summary = split_cli::run(&args).unwrap();

        assert_eq!(summary.threshold, 2);
        assert_eq!(summary.files.len(), 2);
        assert_eq!(fs::read_to_string(dir.path().join("out_aa")).unwrap(), "a\nb\n");
        assert_eq!(fs::read_to_string(dir.path().join("out_ab")).unwrap(), "c\n");
    }

    #[test]
    fn test_run_validates_before_reading_input() {
        // The input does not exist, but the conflict is reported first
        let args = Args::parse_from(["split", "-l", "2", "-n", "2", "/no/such/input"]);
        let result = split_cli::run(&args);
        assert!(matches!(result, Err(Error::ConfigurationConflict)));
    }

    #[test]
    fn test_run_chunk_range_splits_like_chunk_count() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.txt");
        fs::write(&input, "1\n2\n3\n4\n").unwrap();
        let prefix = dir.path().join("x").to_string_lossy().to_string();

        let args = Args::parse_from([
            "split",
            "-n",
            "1/2",
            "--prefix",
            prefix.as_str(),
            input.to_str().unwrap(),
        ]);
        let summary = split_cli::run(&args).unwrap();

        let units: Vec<usize> = summary.files.iter().map(|f| f.units).collect();
        assert_eq!(units, vec![2, 2]);
    }
}
