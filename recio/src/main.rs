use clap::Parser;
use reciolib::{
    error::{RecioError, Result},
    fetch::DEFAULT_USERS_URL,
    runner::{self, Outcome, Settings, DEFAULT_CSV, DEFAULT_JSON, DEFAULT_XML},
    sheet::{SheetConfig, DEFAULT_USERS_XLSX, DEFAULT_WORKSHEET},
};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name="recio", version, about="Пользователи из сети и каталоги книг: таблицы и xlsx")]
struct Cli {
    /// Адрес списка пользователей
    #[arg(long="users-url", env="RECIO_USERS_URL", default_value=DEFAULT_USERS_URL)]
    users_url: String,

    /// Куда записать xlsx с пользователями
    #[arg(long="users-xlsx", default_value=DEFAULT_USERS_XLSX)]
    users_xlsx: PathBuf,

    /// Каталог книг в XML
    #[arg(long="xml", default_value=DEFAULT_XML)]
    xml: PathBuf,

    /// Каталог книг в CSV
    #[arg(long="csv", default_value=DEFAULT_CSV)]
    csv: PathBuf,

    /// Каталог книг в JSON
    #[arg(long="json", default_value=DEFAULT_JSON)]
    json: PathBuf,

    /// Дополнительно выгрузить книги из JSON в xlsx
    #[arg(long="books-xlsx")]
    books_xlsx: Option<PathBuf>,

    /// Имя листа
    #[arg(long="sheet-name", default_value=DEFAULT_WORKSHEET)]
    sheet_name: String,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Settings {
            users_url: cli.users_url,
            users_xlsx: cli.users_xlsx,
            xml_path: cli.xml,
            csv_path: cli.csv,
            json_path: cli.json,
            books_xlsx: cli.books_xlsx,
            sheet: SheetConfig { worksheet_name: cli.sheet_name },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::from(Cli::parse());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match runner::run(&settings, &mut out).await? {
        Outcome::Skipped => log::debug!("nothing to do"),
        Outcome::Completed { users } => log::debug!("{users} users processed"),
    }

    io::Write::flush(&mut out).map_err(RecioError::from)
}
