//! Built-in demo handlers and the route table wiring them together.

use crate::registry::{HandlerError, ParamSpec, Route};

fn hello(_args: &[String]) -> Result<String, HandlerError> {
    Ok("Hello World!".to_string())
}

fn manana(_args: &[String]) -> Result<String, HandlerError> {
    Ok("Mañana es viernes".to_string())
}

fn euler(_args: &[String]) -> Result<String, HandlerError> {
    Ok("euler es igual a 2,7182818284590".to_string())
}

fn editor(_args: &[String]) -> Result<String, HandlerError> {
    Ok("El editor es Nicolas Sebastian Achuri Macias".to_string())
}

fn greeting(args: &[String]) -> Result<String, HandlerError> {
    let name = args.first().map(String::as_str).unwrap_or_default();
    Ok(format!("Hola, {name}"))
}

/// Routes served out of the box. `main` registers these before binding.
pub fn routes() -> Vec<Route> {
    vec![
        Route::new("/hello", "hello", hello, vec![]),
        Route::new("/mañana", "manana", manana, vec![]),
        Route::new("/euler", "euler", euler, vec![]),
        Route::new("/editor", "editor", editor, vec![]),
        Route::new(
            "/greeting",
            "greeting",
            greeting,
            vec![ParamSpec::new("name", "World")],
        ),
    ]
}
