/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the classification heuristics, display limits,
/// and locale strings used across the application. The heuristic keyword
/// sets mirror the pt-BR column names produced by Google Forms exports and
/// must stay in sync with the report strings in `messages`.
/// Output format constants
pub mod output_formats {
    /// Text output format - colorful report with unicode bar charts
    pub const TEXT: &str = "text";
    /// JSON output format - full report structure for automation
    pub const JSON: &str = "json";
    /// Minimal output format - plain text without colors or emojis
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Column classification heuristics
pub mod classification {
    /// Timestamp column names in preference order. Matching is a
    /// case-insensitive substring test, scanning preferences outer loop so a
    /// higher-preference label anywhere beats a lower-preference one.
    pub const TIMESTAMP_PREFERENCES: [&str; 4] = [
        "Carimbo de data/hora",
        "Timestamp",
        "Data/hora",
        "Data e hora",
    ];

    /// Keywords that mark a column as a free-text comment field.
    pub const COMMENT_KEYWORDS: [&str; 6] = [
        "coment",
        "sugest",
        "observa",
        "feedback",
        "melhoria",
        "deixe aqui",
    ];

    /// Minimum fraction of cells that must parse as numbers for a column to
    /// qualify as a numeric indicator.
    pub const NUMERIC_PARSE_RATE: f64 = 0.5;
    /// Maximum distinct parsed values for a numeric indicator. Likert-style
    /// rating columns have few distinct values; free numeric entry has many.
    pub const MAX_DISTINCT_NUMERIC: usize = 20;

    /// Substring that marks the overall score column for the summary metric.
    pub const SCORE_COLUMN_KEYWORD: &str = "pontuação";
}

/// Anonymization constants
pub mod redaction {
    /// Generic e-mail shape: word-ish local part, "@", word-ish domain,
    /// dot, word top-level suffix.
    pub const EMAIL_PATTERN: &str = r"[\w\.-]+@[\w\.-]+\.\w+";
    /// Replacement marker for redacted e-mail addresses.
    pub const EMAIL_MARKER: &str = "[e-mail removido]";
}

/// Display and formatting constants
pub mod display {
    /// Column labels longer than this are truncated for charts and tables
    pub const MAX_LABEL_CHARS: usize = 60;
    /// Characters kept before the ellipsis when truncating a label
    pub const LABEL_TRUNCATE_AT: usize = 57;
    /// Truncation marker appended to shortened labels
    pub const ELLIPSIS: &str = "…";

    /// Answers shown on the frequency chart (the table lists all of them)
    pub const CHART_TOP_ANSWERS: usize = 15;

    /// Bounds and default for comments displayed per comment field
    pub const MIN_COMMENTS: usize = 5;
    pub const MAX_COMMENTS: usize = 100;
    pub const DEFAULT_MAX_COMMENTS: usize = 30;

    /// Placeholder for metrics that cannot be computed
    pub const NOT_AVAILABLE: &str = "—";

    /// Widest bar drawn in terminal charts
    pub const MAX_BAR_WIDTH: usize = 40;
    /// Cell width cap for the optional raw-table dump
    pub const RAW_CELL_CHARS: usize = 40;
}

/// User-facing report strings (source locale, pt-BR)
pub mod messages {
    pub const SECTION_SUMMARY: &str = "Resumo Geral";
    pub const SECTION_INDICATORS: &str = "Indicadores de Avaliação (Médias)";
    pub const SECTION_QUESTIONS: &str = "Questões Conceituais (Frequência)";
    pub const SECTION_COMMENTS: &str = "Comentários Qualitativos";
    pub const SECTION_RAW_TABLE: &str = "Tabela de Dados (não sensíveis)";

    pub const METRIC_RESPONDENTS: &str = "Respondentes";
    pub const METRIC_PERIOD: &str = "Período";
    pub const METRIC_MEAN_SCORE: &str = "Média de Pontuação";

    pub const EMPTY_INPUT: &str = "O arquivo foi carregado, mas não contém dados.";
    pub const NO_NUMERIC_INDICATORS: &str =
        "Não foram encontrados indicadores numéricos suficientes.";
    pub const NO_CATEGORICAL_QUESTIONS: &str = "Nenhuma questão textual identificada.";
    pub const NO_COMMENT_COLUMNS: &str = "Nenhum campo de comentários encontrado.";
    pub const NO_COMMENTS_IN_COLUMN: &str = "Sem comentários.";
}
