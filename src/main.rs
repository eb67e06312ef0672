use clap::Parser;
use ticket_inspector::core::ConfigProvider;
use ticket_inspector::utils::error::ErrorSeverity;
use ticket_inspector::utils::{logger, validation::Validate};
use ticket_inspector::{
    CliConfig, CredentialFile, HttpTransport, Inspector, InspectorError, Session, StdinPrompt,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ticket-inspector");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config).await {
        exit_with(e);
    }

    Ok(())
}

async fn run(config: &CliConfig) -> Result<(), InspectorError> {
    // 認證檔不存在時不發出任何請求
    let credential_file = CredentialFile::from_file(config.credentials_path())?;

    let mut prompt = StdinPrompt::new();
    let credential = credential_file.resolve(&mut prompt)?;

    let session = Session::new(credential, HttpTransport::new(), config)?;
    let mut inspector = Inspector::new(session, prompt, std::io::stdout());
    let inspection = inspector.run().await?;

    tracing::info!(
        "✅ Board {} / epic {}: {} tickets, {} SP",
        inspection.board_id,
        inspection.epic_id,
        inspection.result.overall.count,
        inspection.result.overall.sp_sum
    );
    Ok(())
}

fn exit_with(e: InspectorError) {
    let severity = e.severity();

    // 空結果已由報表輸出提示，不再重複
    if severity == ErrorSeverity::Low {
        tracing::info!("Stopped: {}", e);
        return;
    }

    tracing::error!(
        "❌ Inspection failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        severity
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());

    let exit_code = match severity {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
