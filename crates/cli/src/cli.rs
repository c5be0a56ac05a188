use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render the Green Lens page as a standalone HTML document.
    Render(RenderArgs),
    /// Validate the content tables and report their shape.
    Check(CheckArgs),
}

#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Specify the directory where `index.html` will be written.
    /// The path must exist and it must point to a directory.
    /// If the output path is not specified then the page is written
    /// to the standard output.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Print the whole content model as JSON instead of the table summary.
    #[arg(long)]
    pub(crate) json: bool,
}

fn parse_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_path_accepts_directories() {
        let dir = tempfile::tempdir().expect("temporary directory");

        assert_eq!(Ok(dir.path().to_path_buf()), parse_path(&dir.path().to_string_lossy()));
    }

    #[test]
    fn parse_path_rejects_files_and_missing_paths() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let file = dir.path().join("index.html");
        File::create(&file).expect("temporary file");

        assert!(parse_path(&file.to_string_lossy()).is_err());
        assert!(parse_path(&dir.path().join("missing").to_string_lossy()).is_err());
    }

    #[test]
    fn render_defaults_to_stdout() {
        let cli = Cli::try_parse_from(["greenlens", "render"]).expect("valid arguments");

        assert!(matches!(
            cli.command,
            Commands::Render(RenderArgs { output_path: None })
        ));
    }
}
