use std::io;
use std::io::Write;

use greenlens_content::PageContent;

use crate::cli::CheckArgs;
use crate::error::CliError;

pub(crate) fn check(args: CheckArgs) -> Result<(), CliError> {
    let content = PageContent::green_lens();
    let mut stdout = io::stdout().lock();

    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &content)?;
        writeln!(stdout)?;
        return Ok(());
    }

    for table in content.tables()? {
        writeln!(
            stdout,
            "{name}: {columns} columns, {rows} rows",
            name = table.name(),
            columns = table.columns().len(),
            rows = table.rows().len()
        )?;
    }

    Ok(())
}
