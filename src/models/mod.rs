//! Data models mirrored from the remote library API

pub mod aluno;
pub mod emprestimo;
pub mod estatistica;
pub mod livro;
pub mod token;

// Re-export commonly used types
pub use aluno::{Aluno, AlunoResponse, AlunoUpdates, CreateAluno};
pub use emprestimo::{DevolucaoResponse, Emprestimo, EmprestimoResponse, NovoEmprestimo};
pub use estatistica::Estatistica;
pub use livro::{CreateLivro, CreateTiragem, Livro, LivroResponse, LivroUpdates, Tiragem, UpdateLivro};
pub use token::{Credentials, TokenPair};
