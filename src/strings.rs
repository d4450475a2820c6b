//! User-facing strings, in the application's Portuguese locale.
//!
//! Everything the UI shows to the user lives here; diagnostics in logs stay
//! in English.

pub const TITLE_LIST: &str = "Cafés Quentes";
pub const TITLE_DETAIL: &str = "Detalhes do Café";

pub const LOADING: &str = "Carregando cafés…";
pub const FETCH_FAILED: &str = "Não foi possível carregar os cafés. Tente novamente.";
pub const EMPTY: &str = "Nenhum café encontrado.";
pub const NO_SELECTION: &str = "Nenhum item selecionado.";
pub const INGREDIENTS: &str = "Ingredientes";
pub const REFRESHING: &str = "atualizando…";

pub const RETRY_HINT: &str = "r: Tentar novamente";
pub const RELOAD_HINT: &str = "r: Recarregar";
pub const LIST_KEY_HINTS: &str = " ↑/↓: Navegar │ Enter: Detalhes │ r: Recarregar │ q: Sair";
pub const DETAIL_KEY_HINTS: &str = " Esc: Voltar │ ↑/↓: Rolar │ q: Sair";
