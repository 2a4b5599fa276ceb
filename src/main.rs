use clap::Parser;

use props_translate::cli::Args;
use props_translate::cli::commands::translate;
use props_translate::cli::exit::exit_code;
use props_translate::config::ResolveOptions;
use props_translate::output::{self, OutputConfig};
use props_translate::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    let options = translate::TranslateOptions {
        resolve: ResolveOptions {
            source_file: args.source_file,
            target_file: args.target_file,
            source: args.source,
            target: args.target,
            api_key: args.key,
            endpoint: args.endpoint,
        },
        config: args.config,
    };

    if let Err(err) = translate::run_translate(options).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}
