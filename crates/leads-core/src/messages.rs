//! User-facing text. The product ships in Brazilian Portuguese.

pub const PROMPT_FOR_TERM: &str = "Por favor, insira um termo de busca.";
pub const SEARCH_IN_PROGRESS: &str =
    "Buscando e processando dados... Isso pode levar alguns minutos.";
pub const SEARCH_FAILED: &str = "Ocorreu um erro ao buscar os dados. Tente novamente.";
pub const SEARCH_EMPTY: &str = "A busca foi concluída, mas nenhum dado foi retornado.";
pub const NO_RESULTS_ROW: &str = "Nenhum resultado encontrado.";
pub const SERVER_FAILURE_ROW: &str = "Falha na comunicação com o servidor.";
pub const NOTHING_TO_EXPORT: &str = "Não há dados para exportar.";

#[must_use]
pub fn search_completed(count: usize) -> String {
    format!("Busca concluída! {count} resultados encontrados.")
}

/// Example searches rotated through the empty search field.
pub const PLACEHOLDER_EXAMPLES: [&str; 5] = [
    "Ex: Oficinas em Fernandópolis, SP",
    "Ex: Restaurantes em São Paulo, SP",
    "Ex: Advogados no Rio de Janeiro, RJ",
    "Ex: Padarias em Belo Horizonte, MG",
    "Ex: Clínicas veterinárias em Curitiba, PR",
];
