use std::sync::Arc;

use serde::Serialize;

use user_store::{
    app::resource::iam::CreateUser,
    config::{env_var, logging},
    domain::{entity::iam::User, service::UserService},
    infra::{controller::UserController, repository::InMemoryRepository, store::RecordStore},
};

fn print_reply<T: Serialize, E: Serialize>(label: &str, reply: &Result<T, E>) {
    let body = match reply {
        Ok(ok) => serde_json::to_string_pretty(ok),
        Err(err) => serde_json::to_string_pretty(err),
    };
    match body {
        Ok(body) => println!("{label}\n{body}"),
        Err(err) => tracing::error!(label, "could not serialize reply: {err}"),
    }
}

fn main() {
    if let Err(err) = dotenv::dotenv() {
        eprintln!("No .env file loaded: {err}");
    }

    let env = env_var::get();
    logging::init(env);
    tracing::info!(app = env.app_name.as_str(), "starting");

    let store = RecordStore::<User>::new();
    let repository = InMemoryRepository::new(store);
    let service = Arc::new(UserService::new(repository));
    let controller = UserController::new(service);

    let created = controller.create(CreateUser {
        id: "1",
        name: "user1",
        password: "password1",
    });
    print_reply("create user 1", &created);

    print_reply("get user 1", &controller.get_by_id("1"));
    print_reply("get user 2", &controller.get_by_id("2"));

    tracing::info!(app = env.app_name.as_str(), "done");
}
