use clap::Parser;
use recipe_book::utils::error::ErrorSeverity;
use recipe_book::utils::{logger, validation::Validate};
use recipe_book::{
    dry_run_summary, BookConfig, CatalogPipeline, CliConfig, LocalStorage, RecipeError,
    ReportEngine,
};

fn exit_with(e: &RecipeError) -> ! {
    tracing::error!(
        "❌ Recipe report failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // exit code follows severity
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("📁 Loading recipe book from: {}", args.config);

    let mut book = match BookConfig::from_file(&args.config) {
        Ok(book) => book,
        Err(e) => exit_with(&e),
    };

    args.apply_overrides(&mut book);

    if let Err(e) = book.validate() {
        exit_with(&e);
    }

    tracing::info!("✅ Recipe book loaded and validated successfully");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        println!("{}", dry_run_summary(&book));
        return Ok(());
    }

    let storage = LocalStorage::new(book.output_path().to_string());
    let pipeline = CatalogPipeline::new(storage, book);
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Recipe report completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}
