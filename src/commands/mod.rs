//! Command implementation for poster-gen.
//!
//! One invocation produces one poster: collect or load the request, confirm
//! it, then hand it to the generation pipeline.

use crate::cli::Cli;
use crate::collect::{self, Prompter};
use crate::config::{Settings, resolve_api_key};
use crate::error::Result;
use crate::fs::expand_home;
use crate::generate::{GeminiClient, Pipeline};
use crate::layout::OutputLayout;
use std::io;

const BANNER_WIDTH: usize = 50;

/// Run the CLI to completion.
pub fn dispatch(cli: Cli) -> Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    println!("\n{rule}\n🎨 {}\n{rule}", cli.scene.description());

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());

    let request = match &cli.info {
        Some(path) => {
            let request = collect::load_request(path, cli.scene)?;
            println!("\n从文件读取: {}", path.display());
            request
        }
        None => collect::collect(&mut prompter, cli.scene)?,
    };

    collect::write_summary(&mut io::stdout(), &request)?;
    if cli.info.is_none() {
        collect::confirm(&mut prompter)?;
    }

    let api_key = resolve_api_key(cli.api_key.as_deref())?;
    let settings = Settings::default().with_model(cli.model);
    let override_dir = cli.output.as_deref().map(expand_home);
    let layout = OutputLayout::new(
        &settings.output_root,
        override_dir.as_deref(),
        request.scenario(),
        request.title(),
    );
    tracing::info!(
        scenario = %request.scenario(),
        model = %settings.model,
        dir = %layout.dir().display(),
        "starting generation"
    );

    let client = GeminiClient::new(&settings, api_key)?;
    let mut pipeline = Pipeline::new(&client, &settings, layout);
    match pipeline.run(&request) {
        Ok(outcome) => {
            println!("\n{}", outcome.message);
            println!("📁 输出文件: {}", outcome.output_file.display());
            Ok(())
        }
        Err(err) => {
            if err.is_generation_failure() {
                println!("\n生成失败");
            }
            Err(err)
        }
    }
}
