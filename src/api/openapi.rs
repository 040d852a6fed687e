//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{alunos, banner, emprestimos, estatistica, health, livros, pages, tokens};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        version = "1.0.0",
        description = "Library pages and RPC procedures proxied to the remote library API"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Pages
        pages::catalog,
        pages::livro_detail,
        pages::alunos,
        pages::aluno_detail,
        pages::emprestimos,
        pages::estatistica,
        // Tokens
        tokens::get_tokens,
        // Alunos
        alunos::get_all_alunos,
        alunos::create_aluno,
        alunos::edit_aluno,
        alunos::edit_a_field_of_aluno,
        // Livros
        livros::get_livro,
        livros::get_todos_livros,
        livros::get_livros_disponiveis,
        livros::get_livros_indisponiveis,
        livros::create_livro,
        livros::update_livro,
        livros::patch_livro,
        livros::create_tiragem,
        // Emprestimos
        emprestimos::todos_os_emprestimos,
        emprestimos::emprestimos_por_aluno,
        emprestimos::emprestimo,
        emprestimos::devolucao,
        // Estatistica
        estatistica::get_estatistica,
        // Views
        alunos::enter_edit,
        alunos::set_edit_field,
        alunos::cancel_edit,
        alunos::save_edit,
        emprestimos::loan_form,
        emprestimos::register_loan,
        banner::current_banner,
        banner::dismiss_banner,
    ),
    components(
        schemas(
            crate::models::Credentials,
            crate::models::TokenPair,
            crate::models::Aluno,
            crate::models::CreateAluno,
            crate::models::AlunoUpdates,
            crate::models::AlunoResponse,
            crate::models::Livro,
            crate::models::Tiragem,
            crate::models::CreateLivro,
            crate::models::UpdateLivro,
            crate::models::LivroUpdates,
            crate::models::CreateTiragem,
            crate::models::LivroResponse,
            crate::models::livro::TiragemResponse,
            crate::models::livro::PutLivroResponse,
            crate::models::Emprestimo,
            crate::models::NovoEmprestimo,
            crate::models::EmprestimoResponse,
            crate::models::DevolucaoResponse,
            crate::models::Estatistica,
            crate::views::Banner,
            crate::views::BannerKind,
            crate::views::AlunoField,
            crate::views::EditView,
            crate::views::LoanFormView,
            crate::views::BookOption,
            crate::views::loan_form::AlunoOption,
            alunos::SetFieldRequest,
            emprestimos::RegisterLoanRequest,
            health::HealthResponse,
            crate::error::ErrorResponse,
            super::AlunoOutcome,
            super::EditOutcome,
            super::LivroOutcome,
            super::PutLivroOutcome,
            super::TiragemOutcome,
            super::EmprestimoOutcome,
            super::DevolucaoOutcome,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "pages", description = "Page view models"),
        (name = "tokens", description = "Credential exchange"),
        (name = "alunos", description = "Students"),
        (name = "livros", description = "Books and print-runs"),
        (name = "emprestimos", description = "Loans and returns"),
        (name = "estatistica", description = "Totals"),
        (name = "views", description = "Edit mode, loan form and banners")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
