//! `zonepull export` - Export every zone of the account.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Duration;

use anyhow::{Context as _, Result};
use colored::Colorize;
use dialoguer::Password;
use zonepull_client::ApiClient;
use zonepull_core::{Credentials, ZoneExport};

use super::Context;
use crate::cli::args::ExportArgs;

pub async fn execute(ctx: Context, args: ExportArgs) -> Result<()> {
    let username = ctx.resolve_username(args.username)?;
    let api_url = ctx.require_api_url()?;

    // Everything else is validated before prompting for the password.
    let password = match args.password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let client = ApiClient::builder(api_url)
        .timeout(Duration::from_secs(args.timeout))
        .build();
    let credentials = Credentials::new(username, password);

    let mut export = ZoneExport::begin(client, credentials)
        .await
        .context("could not list the account's domains")?;

    // The output file is created only once the domain list is in hand; a
    // failed login must not leave an empty file behind.
    let outfile = args.outfile.map(|p| shellexpand::tilde(&p).into_owned());
    let mut out = match &outfile {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("could not create {path}"))?;
            Output::File(BufWriter::new(file))
        }
        None => Output::Stdout(io::stdout()),
    };

    // Progress is printed only in file mode; in stdout mode the zone text
    // is the only output.
    let progress = outfile.is_some();
    let total = export.domains().len();
    let mut first = true;

    while let Some(block) = export.next_zone().await {
        let block = block?;
        if progress {
            println!("{} {}", "Exporting".bold(), block.domain.name.cyan());
        }
        if !first {
            out.write_line("")?;
        }
        for line in &block.lines {
            out.write_line(line)?;
        }
        first = false;
    }
    out.finish()?;

    if let Some(path) = &outfile {
        println!(
            "{} {} zone(s) written to {}",
            "Done.".green().bold(),
            total,
            path.cyan()
        );
    }

    Ok(())
}

enum Output {
    File(BufWriter<File>),
    Stdout(io::Stdout),
}

impl Output {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            Self::File(w) => writeln!(w, "{line}"),
            Self::Stdout(w) => writeln!(w, "{line}"),
        }
    }

    fn finish(self) -> io::Result<()> {
        match self {
            Self::File(mut w) => w.flush(),
            Self::Stdout(mut w) => w.flush(),
        }
    }
}
