//! User-facing texts of the registration form (pt-BR)

pub const NAME_REQUIRED: &str = "Nome é obrigatório";
pub const EMAIL_REQUIRED: &str = "E-mail é obrigatório";
pub const EMAIL_INVALID: &str = "E-mail inválido";
pub const PHONE_REQUIRED: &str = "Telefone é obrigatório";
pub const PHONE_FORMAT: &str = "Telefone deve estar no formato (XX) XXXXX-XXXX";
pub const PASSWORD_REQUIRED: &str = "Senha é obrigatória";
pub const PASSWORD_TOO_SHORT: &str = "Mínimo de 6 caracteres";
pub const PASSWORD_COMPLEXITY: &str =
    "A senha deve conter letra maiúscula, letra minúscula e número";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Confirmação de senha é obrigatória";
pub const PASSWORDS_DONT_MATCH: &str = "As senhas não coincidem";

pub const FORM_TITLE: &str = "Cadastro de Usuário";
pub const SUBMIT_LABEL: &str = "Cadastrar";
pub const CONFIRMATION: &str = "Cadastro realizado com sucesso!";
pub const CLOSE_LABEL: &str = "Fechar";

/// Message for a name shorter than `min` characters
pub fn name_too_short(min: usize) -> String {
    format!("Nome deve ter pelo menos {} caracteres", min)
}
