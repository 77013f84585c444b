//! Terminal shim and entry point.
//!
//! This binary is the thin integration layer between the tomeshelf library
//! and the terminal: it parses configuration from the environment,
//! initializes tracing and the session, then runs a line-oriented command
//! loop that translates text commands into library [`Command`]s and
//! executes the returned effects through the renderer. All browsing
//! semantics live in the library; this file only maps text to commands.
//!
//! # Commands
//!
//! - `search [title words] [author=<id>] [genre=<id>]`: filter the catalog
//!   (bare words form the title query; `author`/`genre` default to `any`)
//! - `more`: reveal the next page of results
//! - `open <book-id>`: open the detail view for a book
//! - `close`: close the detail view
//! - `theme <day|night>`: switch the color theme
//! - `authors` / `genres`: list the filterable ids
//! - `help`: print this command list
//! - `quit` / `q`: exit
//!
//! # Configuration
//!
//! Via `TOMESHELF_*` environment variables:
//!
//! ```text
//! TOMESHELF_CATALOG=/path/to/catalog.json
//! TOMESHELF_PAGE_SIZE=36
//! TOMESHELF_THEME=night
//! TOMESHELF_THEME_FILE=/path/to/theme.toml
//! TOMESHELF_LOG=debug
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tomeshelf::browse::{handle_command, Command, FieldFilter, FilterCriteria};
use tomeshelf::view::renderer::Renderer;
use tomeshelf::view::theme::{Theme, ThemeName};
use tomeshelf::{Config, Effect, SessionState};

fn main() -> ExitCode {
    let config = Config::from_env();
    tomeshelf::observability::init_tracing(&config);

    let mut state = match tomeshelf::initialize(&config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("tomeshelf: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut renderer = Renderer::new(state.theme);

    // A custom theme file overrides the built-in token pair.
    if let Some(path) = &config.theme_file {
        match Theme::from_file(path) {
            Ok(theme) => renderer.execute(&Effect::ApplyTheme(theme.colors)),
            Err(e) => eprintln!("tomeshelf: {e} (keeping built-in theme)"),
        }
    }

    // Initial load: render the first page of the unfiltered catalog.
    renderer.execute(&Effect::RenderPage(state.page_view()));

    run_loop(&mut state, &mut renderer)
}

/// Reads commands from stdin until EOF or `quit`.
fn run_loop(state: &mut SessionState, renderer: &mut Renderer) -> ExitCode {
    let stdin = io::stdin();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return ExitCode::SUCCESS,
            Ok(_) => {}
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "q" {
            return ExitCode::SUCCESS;
        }

        match parse_line(line, state) {
            Parsed::Command(command) => {
                for effect in handle_command(state, &command) {
                    renderer.execute(&effect);
                }
            }
            Parsed::Handled => {}
            Parsed::Unknown => {
                println!("unknown command; try 'help'");
            }
        }
    }
}

/// Outcome of parsing one input line.
enum Parsed {
    /// A library command to dispatch.
    Command(Command),

    /// Fully handled here (listings, help).
    Handled,

    /// Not recognized.
    Unknown,
}

/// Parses one input line into a command or a local action.
fn parse_line(line: &str, state: &SessionState) -> Parsed {
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "search" => Parsed::Command(Command::SubmitSearch(parse_criteria(rest))),
        "more" => Parsed::Command(Command::ShowMore),
        "open" if !rest.is_empty() => Parsed::Command(Command::SelectBook {
            id: rest.to_string(),
        }),
        "close" => Parsed::Command(Command::CloseDetail),
        "theme" => match rest.parse::<ThemeName>() {
            Ok(theme) => Parsed::Command(Command::SubmitTheme { theme }),
            Err(e) => {
                println!("{e}");
                Parsed::Handled
            }
        },
        "authors" => {
            println!("any\tAll Authors");
            for (id, name) in state.catalog.authors() {
                println!("{id}\t{name}");
            }
            Parsed::Handled
        }
        "genres" => {
            println!("any\tAll Genres");
            for (id, name) in state.catalog.genres() {
                println!("{id}\t{name}");
            }
            Parsed::Handled
        }
        "help" => {
            println!("search [title words] [author=<id>] [genre=<id>]");
            println!("more | open <book-id> | close | theme <day|night>");
            println!("authors | genres | help | quit");
            Parsed::Handled
        }
        _ => Parsed::Unknown,
    }
}

/// Builds filter criteria from search arguments.
///
/// `author=` and `genre=` tokens set the dropdown fields (`any` is the
/// wildcard, as in the search form); every other token joins the title
/// query.
fn parse_criteria(args: &str) -> FilterCriteria {
    let mut criteria = FilterCriteria::default();
    let mut title_words: Vec<&str> = Vec::new();

    for token in args.split_whitespace() {
        if let Some(id) = token.strip_prefix("author=") {
            criteria.author = FieldFilter::from_form(id);
        } else if let Some(id) = token.strip_prefix("genre=") {
            criteria.genre = FieldFilter::from_form(id);
        } else {
            title_words.push(token);
        }
    }

    criteria.title_query = title_words.join(" ");
    criteria
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_arguments_split_into_fields_and_title() {
        let criteria = parse_criteria("dune messiah author=f-herbert genre=any");
        assert_eq!(criteria.title_query, "dune messiah");
        assert_eq!(criteria.author, FieldFilter::from_form("f-herbert"));
        assert_eq!(criteria.genre, FieldFilter::Any);
    }

    #[test]
    fn bare_search_matches_everything() {
        let criteria = parse_criteria("");
        assert_eq!(criteria, FilterCriteria::default());
    }
}
