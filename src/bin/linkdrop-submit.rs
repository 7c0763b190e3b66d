//! Seeds a record from the command line through the same validation and
//! storage path as the HTTP service.

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("usage: linkdrop-submit <url> [summary]");
        std::process::exit(2);
    }

    let db_url = std::env::var("DB_URL").expect("Environment variable DB_URL not set");

    let db = sea_orm::Database::connect(db_url).await.expect("Unable to connect to database");

    let summary = args.get(2).cloned();
    match linkdrop_server::store::insert(&db, &args[1], summary).await {
        Ok(record) => println!("{}", record.id),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
