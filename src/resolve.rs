use std::io::{self, BufRead, Write};

/// Источник имени аккаунта, когда его нет во входных данных.
///
/// В CLI это интерактивный вопрос в терминале, в тестах обычное замыкание.
pub trait AccountSupplier {
    fn account_for(&mut self, service: &str) -> io::Result<String>;
}

impl<F> AccountSupplier for F
where
    F: FnMut(&str) -> io::Result<String>,
{
    fn account_for(&mut self, service: &str) -> io::Result<String> {
        self(service)
    }
}

/// Спрашивает аккаунт у оператора через stdin. Блокирует до ответа.
pub struct StdinPrompt;

impl AccountSupplier for StdinPrompt {
    fn account_for(&mut self, service: &str) -> io::Result<String> {
        let stdin = io::stdin();
        prompt_account(service, &mut stdin.lock(), &mut io::stdout())
    }
}

pub fn prompt_account<R: BufRead, W: Write>(
    service: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<String> {
    write!(out, "Enter a username (or email) for your {service} account: ")?;
    out.flush()?;
    read_answer(input)
}

/// Ответ возвращается как есть, срезается только перевод строки.
fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut s = String::new();
    input.read_line(&mut s)?;
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    Ok(s)
}
