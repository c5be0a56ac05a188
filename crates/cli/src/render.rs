use greenlens_vis::PageReport;
use greenlens_vis::render::output::OutputFile;
use greenlens_vis::render::output::StdoutStream;
use tracing::info;

use crate::cli::RenderArgs;
use crate::error::CliError;

pub(crate) fn render(args: RenderArgs) -> Result<(), CliError> {
    let report = PageReport::default();

    match args.output_path {
        Some(path) => {
            let mut output = OutputFile::new(&path);
            report.write_to(&mut output)?;
            info!(path = %output.path().display(), "wrote page");
        }
        None => report.write_to(&mut StdoutStream::new())?,
    }

    Ok(())
}
