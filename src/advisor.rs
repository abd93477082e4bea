// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::LedgerError;
use crate::models::{Goal, Transaction, TransactionKind};

/// Shown in place of the flash insight when the advisor is unreachable.
pub const INSIGHT_FALLBACK: &str = "Mantenha o foco nas suas finanças!";

/// How many of the most recent transactions feed the flash insight.
const RECENT_INSIGHT: usize = 10;
/// How many feed the full consultancy.
const RECENT_CONSULTANCY: usize = 20;

const UA: &str = concat!(
    "coinsight/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/coinsight)"
);

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// The consultancy capability. Implementations own all network I/O; the
/// ledger only ever sees this trait.
pub trait Advisor {
    /// A one-line status read (at most 30 words) over the most recent
    /// transactions.
    fn dashboard_insight(&self, transactions: &[Transaction]) -> Result<String, LedgerError>;

    /// The full structured consultancy report. Failures are terminal for
    /// the request; the caller decides whether to ask again.
    fn full_consultancy(
        &self,
        transactions: &[Transaction],
        goals: &[Goal],
    ) -> Result<ConsultancyReport, LedgerError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultancyReport {
    /// 0-100.
    pub health_score: u8,
    pub status: HealthStatus,
    pub analysis: String,
    pub cut_suggestions: Vec<String>,
    pub investment_tips: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    #[serde(rename = "Crítico")]
    Critical,
    #[serde(rename = "Alerta")]
    Alert,
    #[serde(rename = "Saudável")]
    Healthy,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HealthStatus::Critical => "Crítico",
            HealthStatus::Alert => "Alerta",
            HealthStatus::Healthy => "Saudável",
        };
        f.write_str(label)
    }
}

/// Most recent first, ties broken by id so repeated calls are stable.
fn most_recent(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut recent: Vec<&Transaction> = transactions.iter().collect();
    recent.sort_by(|a, b| (b.date, b.id).cmp(&(a.date, a.id)));
    recent.truncate(limit);
    recent
}

pub fn insight_prompt(transactions: &[Transaction]) -> String {
    let lines: Vec<String> = most_recent(transactions, RECENT_INSIGHT)
        .iter()
        .map(|t| {
            format!(
                "{}: {} R$ {}",
                t.kind.as_str(),
                t.description,
                t.amount.round_dp(2)
            )
        })
        .collect();
    format!(
        "Analise estas últimas transações e gere um \"insight flash\" (máximo 30 palavras) \
         para o dashboard do Coinsight. Seja motivacional ou de alerta. Dados:\n{}",
        lines.join("\n")
    )
}

pub fn consultancy_prompt(
    transactions: &[Transaction],
    goals: &[Goal],
) -> Result<String, LedgerError> {
    let mut sums: Vec<(&'static str, Decimal)> = vec![
        (TransactionKind::Income.as_str(), Decimal::ZERO),
        (TransactionKind::FixedExpense.as_str(), Decimal::ZERO),
        (TransactionKind::VariableExpense.as_str(), Decimal::ZERO),
    ];
    for t in transactions {
        if let Some(slot) = sums.iter_mut().find(|(k, _)| *k == t.kind.as_str()) {
            slot.1 += t.amount;
        }
    }
    let sums_line: Vec<String> = sums
        .iter()
        .map(|(k, v)| format!("{}: R$ {}", k, v.round_dp(2)))
        .collect();

    let recent = most_recent(transactions, RECENT_CONSULTANCY);
    let recent_json = serde_json::to_string(&recent)
        .map_err(|e| LedgerError::ExternalService(format!("encode transactions: {e}")))?;
    let goals_json = serde_json::to_string(goals)
        .map_err(|e| LedgerError::ExternalService(format!("encode goals: {e}")))?;

    Ok(format!(
        "Atue como o Consultor Financeiro AI do Coinsight.\n\
         Dados financeiros (soma por tipo): {}\n\
         Transações recentes: {}\n\
         Metas: {}\n\
         Contexto: Brasil (Selic, inflação).\n\
         Gere um relatório completo.",
        sums_line.join(", "),
        recent_json,
        goals_json
    ))
}

fn insight_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "Uma frase curta (máximo 30 palavras) de alerta ou incentivo sobre o saldo atual."
            }
        },
        "required": ["summary"]
    })
}

fn consultancy_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "healthScore": { "type": "INTEGER", "description": "Nota de 0 a 100." },
            "status": { "type": "STRING", "enum": ["Crítico", "Alerta", "Saudável"] },
            "analysis": { "type": "STRING", "description": "Análise profunda de padrões." },
            "cutSuggestions": { "type": "ARRAY", "items": { "type": "STRING" } },
            "investmentTips": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["healthScore", "status", "analysis", "cutSuggestions", "investmentTips"]
    })
}

/// Gemini-backed advisor over the blocking HTTP client.
///
/// The credential comes from `GEMINI_API_KEY` and never leaves this module.
/// No retry, no backoff: a failed request is reported and the user re-runs.
pub struct GeminiAdvisor {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl GeminiAdvisor {
    pub fn from_env() -> Result<Self, LedgerError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| LedgerError::ExternalService("GEMINI_API_KEY is not set".into()))?;
        Self::new(api_key)
    }

    pub fn new(api_key: String) -> Result<Self, LedgerError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent(UA)
            .build()
            .map_err(|e| LedgerError::ExternalService(e.to_string()))?;
        Ok(GeminiAdvisor {
            client,
            api_key,
            model: DEFAULT_MODEL.to_string(),
        })
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// One generateContent round trip; returns the raw JSON text the model
    /// produced under the response schema.
    fn generate(&self, prompt: &str, schema: serde_json::Value) -> Result<String, LedgerError> {
        let url = format!("{}/{}:generateContent", ENDPOINT, self.model);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema,
            }
        });
        let resp = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| LedgerError::ExternalService(e.to_string()))?;
        let envelope: GenerateResponse = resp
            .json()
            .map_err(|e| LedgerError::ExternalService(e.to_string()))?;
        envelope
            .first_text()
            .ok_or_else(|| LedgerError::ExternalService("empty model response".into()))
    }
}

impl Advisor for GeminiAdvisor {
    fn dashboard_insight(&self, transactions: &[Transaction]) -> Result<String, LedgerError> {
        let text = self.generate(&insight_prompt(transactions), insight_schema())?;
        let payload: InsightPayload = serde_json::from_str(&text)
            .map_err(|e| LedgerError::ExternalService(format!("malformed insight payload: {e}")))?;
        Ok(payload.summary)
    }

    fn full_consultancy(
        &self,
        transactions: &[Transaction],
        goals: &[Goal],
    ) -> Result<ConsultancyReport, LedgerError> {
        let prompt = consultancy_prompt(transactions, goals)?;
        let text = self.generate(&prompt, consultancy_schema())?;
        serde_json::from_str(&text).map_err(|e| {
            LedgerError::ExternalService(format!("malformed consultancy payload: {e}"))
        })
    }
}

#[derive(Debug, Deserialize)]
struct InsightPayload {
    summary: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .find_map(|p| p.text)
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}
