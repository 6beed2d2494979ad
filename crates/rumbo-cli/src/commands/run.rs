//! The `rumbo run` command: the full interactive assessment flow.
//!
//! Drives the session engine over stdin/stdout. Closing stdin mid-flow
//! is not an error: progress is already saved after every answer, so the
//! run ends with a resume hint instead.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use rumbo_core::engine::AssessmentEngine;
use rumbo_core::model::{Answer, OptionValue, Question, QuestionKind};
use rumbo_report::{markdown, ResultsView};
use rumbo_store::JsonFileStore;

pub fn execute(
    questions: Option<PathBuf>,
    roadmaps: Option<PathBuf>,
    store_dir: PathBuf,
    output: Option<PathBuf>,
    format: String,
    no_pause: bool,
) -> Result<()> {
    let (questionnaire, catalog) =
        super::load_catalogs(questions.as_deref(), roadmaps.as_deref())?;
    let store = JsonFileStore::new(store_dir);
    let mut engine = AssessmentEngine::new(questionnaire, catalog, Box::new(store));

    let stdin = io::stdin();
    let mut input = stdin.lock();

    print_welcome(&engine);

    // Welcome stage: resume, start fresh, or just begin.
    if engine.saved_state().is_some() {
        println!("Tienes una evaluación en progreso.");
        loop {
            prompt("[c] Continuar donde lo dejé  [n] Empezar de nuevo: ")?;
            let Some(line) = read_line(&mut input)? else {
                return Ok(());
            };
            match line.trim().to_lowercase().as_str() {
                "c" | "" => {
                    engine.resume()?;
                    break;
                }
                "n" => {
                    engine.discard()?;
                    break;
                }
                _ => println!("Responde con \"c\" o \"n\"."),
            }
        }
    } else {
        prompt("Presiona Enter para comenzar... ")?;
        if read_line(&mut input)?.is_none() {
            return Ok(());
        }
        engine.start()?;
    }

    // Questions stage.
    loop {
        let Some(question) = engine.current_question().cloned() else {
            break;
        };
        print_question(&engine, &question);

        let Some(line) = read_line(&mut input)? else {
            println!();
            println!("Progreso guardado. Continúa cuando quieras con `rumbo run`.");
            return Ok(());
        };
        let line = line.trim();

        if line.eq_ignore_ascii_case("b") {
            if engine.back().is_err() {
                println!("Ya estás en la primera pregunta.");
            }
            continue;
        }

        let answer = match parse_selection(&question, line) {
            Ok(answer) => answer,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        if let Err(e) = engine.answer(question.id, answer) {
            println!("{e}");
            continue;
        }

        if engine.position() as usize == engine.total_questions() {
            match engine.submit() {
                Ok(()) => break,
                Err(e) => println!("{e}"),
            }
        } else if let Err(e) = engine.advance() {
            println!("{e}");
        }
    }

    // Loading stage: cosmetic pacing only, the derivation is instant.
    println!();
    print!("Analizando tus respuestas");
    io::stdout().flush()?;
    if !no_pause {
        for _ in 0..3 {
            std::thread::sleep(Duration::from_millis(400));
            print!(".");
            io::stdout().flush()?;
        }
    }
    println!();
    engine.finish_analysis()?;

    // Email-capture gate.
    println!();
    println!("🎉 ¡Análisis Completo!");
    println!("Hemos creado tu roadmap personalizado de aprendizaje en IA.");
    println!();

    let email = loop {
        prompt("Email *: ")?;
        let Some(line) = read_line(&mut input)? else {
            println!();
            println!("Entrada cerrada antes de capturar tu email; tus respuestas quedaron guardadas.");
            return Ok(());
        };
        let line = line.trim().to_string();
        if is_valid_email(&line) {
            break line;
        }
        if line.is_empty() {
            println!("Por favor ingresa tu email");
        } else {
            println!("Por favor ingresa un email válido");
        }
    };

    prompt("Nombre (opcional): ")?;
    let name = read_line(&mut input)?.unwrap_or_default().trim().to_string();
    prompt("País (opcional): ")?;
    let country = read_line(&mut input)?.unwrap_or_default().trim().to_string();

    let record = engine.capture_contact(&email, &name, &country)?;

    // Results stage.
    let user_name = (!record.name.is_empty()).then(|| record.name.clone());
    let view = ResultsView::new(user_name, record.profile.clone(), engine.catalog());

    println!();
    println!("{}", markdown::render(&view));

    if let Some(dir) = &output {
        super::write_artifacts(&view, dir, &format)?;
    }

    Ok(())
}

fn print_welcome(engine: &AssessmentEngine) {
    let questionnaire = engine.questionnaire();
    println!("{}", questionnaire.name);
    if !questionnaire.description.is_empty() {
        println!("{}", questionnaire.description);
    }
    println!();
    println!(
        "{} preguntas · 100% local · resultados inmediatos",
        questionnaire.len()
    );
    println!();
}

fn print_question(engine: &AssessmentEngine, question: &Question) {
    println!();
    println!(
        "── Pregunta {}/{} · {} ──",
        engine.position(),
        engine.total_questions(),
        question.category
    );
    println!("{}", question.text);
    for (index, option) in question.options.iter().enumerate() {
        println!("  {}) {}", index + 1, option.text);
    }

    let mut hint = match question.kind {
        QuestionKind::Single => String::from("Elige una opción (número)"),
        QuestionKind::Multi => {
            let mut hint = String::from("Elige opciones separadas por comas (ej. 1,3)");
            if let Some(max) = question.max_selections {
                hint.push_str(&format!(", máximo {max}"));
            }
            if question.min_selections.unwrap_or(0) == 0 {
                hint.push_str("; Enter para ninguna");
            }
            hint
        }
    };
    if engine.position() > 1 {
        hint.push_str("; b para volver");
    }
    println!("{hint}:");
}

/// Map terminal input to an [`Answer`] for the given question.
fn parse_selection(question: &Question, line: &str) -> Result<Answer, String> {
    match question.kind {
        QuestionKind::Single => {
            let index = parse_index(line, question.options.len())?;
            Ok(match &question.options[index].value {
                OptionValue::Number(n) => Answer::Number(*n),
                OptionValue::Token(t) => Answer::Token(t.clone()),
            })
        }
        QuestionKind::Multi => {
            if line.is_empty() {
                return Ok(Answer::Tokens(Vec::new()));
            }
            let mut tokens = Vec::new();
            for part in line.split(',') {
                let index = parse_index(part.trim(), question.options.len())?;
                let token = question.options[index].value.to_token();
                if !tokens.contains(&token) {
                    tokens.push(token);
                }
            }
            Ok(Answer::Tokens(tokens))
        }
    }
}

fn parse_index(s: &str, len: usize) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("Entrada no válida: \"{s}\""))?;
    if n == 0 || n > len {
        return Err(format!("Ingresa un número entre 1 y {len}"));
    }
    Ok(n - 1)
}

/// Same shape check the original web form applied.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty())
}

fn prompt(text: &str) -> Result<()> {
    print!("{text}");
    io::stdout().flush()?;
    Ok(())
}

/// Read one line, returning `None` on end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rumbo_core::model::QuestionOption;

    fn question(kind: QuestionKind, values: &[OptionValue]) -> Question {
        Question {
            id: 1,
            category: "Test".into(),
            text: "¿?".into(),
            kind,
            options: values
                .iter()
                .enumerate()
                .map(|(i, value)| QuestionOption {
                    id: format!("1{i}"),
                    text: format!("Opción {i}"),
                    value: value.clone(),
                })
                .collect(),
            min_selections: None,
            max_selections: None,
        }
    }

    #[test]
    fn single_selection_maps_to_option_value() {
        let q = question(
            QuestionKind::Single,
            &[OptionValue::Number(0.0), OptionValue::Number(2.0)],
        );
        assert_eq!(parse_selection(&q, "2").unwrap(), Answer::Number(2.0));

        let q = question(QuestionKind::Single, &[OptionValue::Token("empleado".into())]);
        assert_eq!(
            parse_selection(&q, "1").unwrap(),
            Answer::Token("empleado".into())
        );
    }

    #[test]
    fn single_selection_rejects_out_of_range() {
        let q = question(QuestionKind::Single, &[OptionValue::Number(0.0)]);
        assert!(parse_selection(&q, "0").is_err());
        assert!(parse_selection(&q, "2").is_err());
        assert!(parse_selection(&q, "x").is_err());
    }

    #[test]
    fn multi_selection_collects_and_dedupes_tokens() {
        let q = question(
            QuestionKind::Multi,
            &[
                OptionValue::Token("chatgpt".into()),
                OptionValue::Token("notion".into()),
                OptionValue::Token("imagen".into()),
            ],
        );
        assert_eq!(
            parse_selection(&q, "1, 3, 1").unwrap(),
            Answer::Tokens(vec!["chatgpt".into(), "imagen".into()])
        );
        assert_eq!(parse_selection(&q, "").unwrap(), Answer::Tokens(vec![]));
        assert!(parse_selection(&q, "1,4").is_err());
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b@sub.example.co"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ana"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana@@example.com"));
        assert!(!is_valid_email("ana maria@example.com"));
        assert!(!is_valid_email("ana@.com"));
        assert!(!is_valid_email("ana@example."));
    }
}
