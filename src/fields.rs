//! Field names and the hardcoded targets of the maintenance tools.

/// Fields introduced by the standardization pass.
pub const EXTENDED_FIELDS: [&str; 4] = ["grupo_id", "tema", "texto_referencia", "image_id"];

/// Key order of a standardized question. Keys outside this list follow in
/// their original relative order.
pub const CANONICAL_ORDER: [&str; 11] = [
    "grupo_id",
    "tema",
    "texto_referencia",
    "image_id",
    "id",
    "materia",
    "dificuldade",
    "enunciado",
    "alternativas",
    "correta",
    "explicacao_base",
];

/// Directory scanned by `standardize_questions` when no path is given.
pub const QUESTIONS_DIR: &str = "/home/alekkzsx/Documentos/VestBot/VestBot/questions";

/// File rewritten by `add_image_id` when no path is given.
pub const PADRAO_FILE: &str = "/home/alekkzsx/Documentos/VestBot/VestBot/questions/padrao.txt";

/// Extension of question files inside [`QUESTIONS_DIR`].
pub const QUESTION_EXTENSION: &str = "txt";

/// Subject used in a synthesized `tema` when the record has no `materia`.
pub const DEFAULT_MATERIA: &str = "Geral";

/// Number of prompt tokens taken into a synthesized `tema`.
pub const TEMA_WORDS: usize = 5;

/// Longest prompt fragment kept verbatim in a synthesized `tema`.
pub const TEMA_MAX_CHARS: usize = 40;

/// Characters kept from an over-long fragment before the ellipsis.
pub const TEMA_TRUNCATED_CHARS: usize = 37;
