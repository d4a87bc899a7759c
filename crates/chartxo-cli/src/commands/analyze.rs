use anyhow::Context;
use chartxo_ai::{AiError, AnalysisClient, CancelToken, GeminiClient, GenerativeTransport, cancel_pair};
use chartxo_config::ChartxoConfig;
use chartxo_core::responses::AnalyzeResponse;
use chartxo_core::{ImagePayload, ScanPhase};
use chartxo_store::AppState;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::output::output;
use crate::progress::Progress;

/// Handle `chartxo analyze`. Ctrl-C abandons the request without saving.
pub async fn handle(
    args: &AnalyzeArgs,
    config: &ChartxoConfig,
    state: &mut AppState,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut gemini = config.require_gemini()?.clone();
    if let Some(timeout_secs) = args.timeout_secs {
        gemini.timeout_secs = timeout_secs;
    }

    let image = ImagePayload::from_file(&args.image)
        .with_context(|| format!("failed to load chart {}", args.image.display()))?;
    let client = AnalysisClient::new(GeminiClient::from_config(&gemini)?);

    let (handle, token) = cancel_pair();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.cancel();
        }
    });

    let progress = Progress::spinner("Analyzing chart...");
    let result = analyze_and_record(&client, &image, &token, state).await;
    watcher.abort();

    match result {
        Ok(response) => {
            progress.finish_clear();
            output(&response, flags.format)
        }
        Err(error) => {
            progress.finish_err("Analysis failed");
            Err(error)
        }
    }
}

/// Walk the scan sub-flow for an uploaded image: idle, analyzing, then
/// result (saved) or failed (nothing saved).
pub async fn analyze_and_record<T: GenerativeTransport>(
    client: &AnalysisClient<T>,
    image: &ImagePayload,
    token: &CancelToken,
    state: &mut AppState,
) -> anyhow::Result<AnalyzeResponse> {
    let phase = ScanPhase::Idle.transition(ScanPhase::Analyzing)?;

    let parsed = match client.analyze_cancellable(image, token).await {
        Ok(parsed) => parsed,
        Err(AiError::Cancelled) => {
            let phase = phase.transition(ScanPhase::Idle)?;
            tracing::info!(%phase, "analysis abandoned");
            anyhow::bail!("analysis cancelled");
        }
        Err(error) => {
            let phase = phase.transition(ScanPhase::Failed)?;
            tracing::debug!(%phase, "scan failed");
            return Err(anyhow::Error::new(error).context("chart analysis failed"));
        }
    };
    let phase = phase.transition(ScanPhase::Result)?;

    let entry = state
        .record_scan(&parsed.analysis, image.to_data_uri())
        .context("failed to save scan to history")?;
    tracing::debug!(%phase, id = %entry.id, "scan recorded");

    Ok(AnalyzeResponse {
        scan_id: entry.id.clone(),
        parse_stage: parsed.stage.as_str().to_string(),
        analysis: parsed.analysis,
    })
}

#[cfg(test)]
mod tests {
    use chartxo_ai::GenerateContentRequest;
    use chartxo_store::LocalStore;
    use pretty_assertions::assert_eq;

    use super::*;

    struct Canned(Result<String, u16>);

    impl GenerativeTransport for Canned {
        async fn generate(&self, _request: &GenerateContentRequest) -> Result<String, AiError> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(AiError::Api {
                    status: *status,
                    message: "model overloaded".into(),
                }),
            }
        }
    }

    fn analysis_text() -> String {
        serde_json::json!({
            "detected_pattern": "Bull Flag",
            "confidence_score": "87%",
            "direction": "Bullish",
            "market_bias": "Trend continuation",
            "analysis_summary": "Tight consolidation after an impulsive leg.",
            "trade_setup": {
                "suggested_entry": "42,100",
                "stop_loss": "41,500",
                "stop_loss_logic": "Below flag low",
                "target_1": "43,000",
                "target_2": "44,200",
                "win_rate_simulation": "64%"
            },
            "why_this_works": "Buyers defend the flag.",
            "risk_shield": {
                "recommended_leverage": "3x",
                "risk_per_trade": "1%"
            },
            "insider_tip": "Wait for the retest.",
            "micro_insights": ["Volume contracting", "Higher lows"],
            "disclaimer_text": "Not financial advice."
        })
        .to_string()
    }

    fn state(dir: &std::path::Path) -> AppState {
        AppState::load(LocalStore::new(dir)).unwrap()
    }

    fn image() -> ImagePayload {
        ImagePayload::from_bytes(b"png-bytes", "image/png")
    }

    #[tokio::test]
    async fn successful_scan_is_saved_to_history() {
        let tmp = tempfile::tempdir().unwrap();
        let mut state = state(tmp.path());
        let client = AnalysisClient::new(Canned(Ok(format!("```json\n{}\n```", analysis_text()))));
        let (_handle, token) = cancel_pair();

        let response = analyze_and_record(&client, &image(), &token, &mut state)
            .await
            .unwrap();

        assert_eq!(response.analysis.detected_pattern, "Bull Flag");
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].id, response.scan_id);
        assert_eq!(state.history()[0].image, image().to_data_uri());
        assert_eq!(state.unread_count(), 1);
    }

    #[tokio::test]
    async fn failed_scan_saves_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut state = state(tmp.path());
        let client = AnalysisClient::new(Canned(Err(503)));
        let (_handle, token) = cancel_pair();

        let error = analyze_and_record(&client, &image(), &token, &mut state)
            .await
            .unwrap_err();

        assert!(format!("{error:#}").contains("model overloaded"));
        assert!(state.history().is_empty());
    }

    #[tokio::test]
    async fn cancelled_scan_saves_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut state = state(tmp.path());
        let client = AnalysisClient::new(Canned(Ok(analysis_text())));
        let (handle, token) = cancel_pair();
        handle.cancel();

        let error = analyze_and_record(&client, &image(), &token, &mut state)
            .await
            .unwrap_err();

        assert!(error.to_string().contains("cancelled"));
        assert!(state.history().is_empty());
    }
}
