use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

const USAGE: &str =
    "Usage: search-runner <search terms> [--year V] [--order V] [--limit N] [--page N] [--page-size N]";

#[derive(Debug, Serialize, Deserialize)]
struct Book {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author_name: Vec<String>,
    #[serde(default)]
    first_publish_year: i32,
    #[serde(default)]
    language: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SearchResponse {
    total: usize,
    books: Vec<Book>,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct SearchArgs {
    query: String,
    options: Vec<(&'static str, String)>,
}

impl SearchArgs {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut terms = Vec::new();
        let mut options = Vec::new();

        let mut i = 0;
        while i < args.len() {
            let key = match args[i].as_str() {
                "--year" => "year",
                "--order" => "order",
                "--limit" => "limit",
                "--page" => "page",
                "--page-size" => "pageSize",
                term => {
                    terms.push(term.to_string());
                    i += 1;
                    continue;
                }
            };
            let value = args
                .get(i + 1)
                .ok_or_else(|| format!("Missing value for {}", args[i]))?;
            options.push((key, value.clone()));
            i += 2;
        }

        if terms.is_empty() {
            return Err("No search terms given".to_string());
        }

        Ok(Self {
            query: terms.join(" "),
            options,
        })
    }
}

struct SearchRunner {
    client: Client,
    base_url: String,
}

impl SearchRunner {
    fn new(host: &str, port: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: format!("http://{}:{}", host, port),
        }
    }

    async fn search(&self, args: &SearchArgs) -> Result<SearchResponse, Box<dyn std::error::Error>> {
        let url = format!("{}/search", self.base_url);
        let mut query: Vec<(&str, &str)> = vec![("q", args.query.as_str())];
        query.extend(args.options.iter().map(|(k, v)| (*k, v.as_str())));

        debug!("GET {} {:?}", url, query);
        let response = self.client.get(&url).query(&query).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let error_msg = format!("Search for '{}' failed: {}", args.query, response.status());
            error!("{}", error_msg);
            Err(error_msg.into())
        }
    }
}

fn format_book(position: usize, book: &Book) -> String {
    let authors = if book.author_name.is_empty() {
        "Unknown Author".to_string()
    } else {
        book.author_name.join(", ")
    };
    let year = if book.first_publish_year > 0 {
        book.first_publish_year.to_string()
    } else {
        "Unknown Year".to_string()
    };
    let languages = if book.language.is_empty() {
        "Unknown languages".to_string()
    } else {
        book.language.join(", ")
    };

    format!(
        "{}. {}\n    - authors: {}\n    - publish year: {}\n    - available languages: {}\n",
        position, book.title, authors, year, languages
    )
}

fn render(query: &str, response: &SearchResponse) -> String {
    let mut out = format!("Books found for '{}':\n\n", query);

    if response.books.is_empty() {
        out.push_str("No books found with that name\n");
    } else {
        for (i, book) in response.books.iter().enumerate() {
            out.push_str(&format_book(i + 1, book));
            out.push('\n');
        }
    }

    out
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("search_runner=info")
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let search_args = match SearchArgs::parse(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let host = std::env::var("API_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = std::env::var("API_PORT").unwrap_or_else(|_| "3000".to_string());
    let runner = SearchRunner::new(&host, &port);

    match runner.search(&search_args).await {
        Ok(response) => {
            print!("{}", render(&search_args.query, &response));
            Ok(())
        }
        Err(e) => {
            eprintln!("Error querying the API: {}", e);
            std::process::exit(1);
        }
    }
}
