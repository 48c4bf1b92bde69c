use anyhow::{anyhow, Result};
use colored::*;
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "🚚 Fleet Dispatch Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    // Paso 1: URL del servidor
    let base_url = get_base_url()?;
    let client = Client::new();

    // Paso 2: Menú principal
    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 🔁 Recorrido completo de endpoints");
        println!("2. 🗺️ Listar rutas");
        println!("3. 🚪 Salir");
        print!("{}", "Selecciona una opción (1-3): ".bright_yellow());
        io::stdout().flush()?;

        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;

        match choice.trim() {
            "1" => match smoke_test(&client, &base_url).await {
                Ok(()) => println!("{}", "✅ Todos los endpoints respondieron como se esperaba".bright_green()),
                Err(e) => println!("{} {}", "❌ Recorrido fallido:".bright_red(), e),
            },
            "2" => {
                let (status, body) = request(&client, Method::GET, &format!("{}/api/routes", base_url), None).await?;
                println!("{} {}", "📥 Estado:".bright_blue(), status);
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
            "3" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
            }
        }
    }

    Ok(())
}

fn get_base_url() -> Result<String> {
    print!("{}", "URL del servidor [http://localhost:5000]: ".bright_yellow());
    io::stdout().flush()?;
    let mut url = String::new();
    io::stdin().read_line(&mut url)?;
    let url = url.trim().trim_end_matches('/');

    Ok(if url.is_empty() {
        "http://localhost:5000".to_string()
    } else {
        url.to_string()
    })
}

async fn request(client: &Client, method: Method, url: &str, body: Option<Value>) -> Result<(StatusCode, Value)> {
    let mut builder = client.request(method, url);
    if let Some(body) = body {
        builder = builder.json(&body);
    }
    let response = builder.send().await?;
    let status = response.status();
    let body = response.json::<Value>().await.unwrap_or(Value::Null);
    Ok((status, body))
}

/// Ejecutar una llamada y comprobar el estado esperado
async fn step(
    client: &Client,
    base_url: &str,
    method: Method,
    path: &str,
    body: Option<Value>,
    expected: StatusCode,
) -> Result<Value> {
    let label = format!("{} {}", method, path);
    let (status, response) = request(client, method, &format!("{}{}", base_url, path), body).await?;

    if status == expected {
        println!("{} {} → {}", "✅".green(), label, status);
        Ok(response)
    } else {
        println!("{} {} → {} (esperado {})", "❌".red(), label, status, expected);
        println!("{}", serde_json::to_string_pretty(&response)?);
        Err(anyhow!("{} devolvió {}", label, status))
    }
}

async fn smoke_test(client: &Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "🔁 RECORRIDO DE ENDPOINTS".bright_cyan().bold());
    println!("{}", "=========================".bright_cyan());

    step(client, base_url, Method::GET, "/health", None, StatusCode::OK).await?;

    // Usuarios: 404 si la colección está vacía
    let (status, _) = request(client, Method::GET, &format!("{}/api/users", base_url), None).await?;
    if status == StatusCode::OK || status == StatusCode::NOT_FOUND {
        println!("{} GET /api/users → {}", "✅".green(), status);
    } else {
        return Err(anyhow!("GET /api/users devolvió {}", status));
    }

    // Tareas
    step(client, base_url, Method::GET, "/api/tasks", None, StatusCode::BAD_REQUEST).await?;
    let task = step(
        client,
        base_url,
        Method::POST,
        "/api/tasks",
        Some(json!({
            "title": "Prueba de humo",
            "description": "Creada por testing-tool",
            "dueDate": "2030-01-01",
            "route": "smoketest"
        })),
        StatusCode::CREATED,
    )
    .await?;
    let task_id = task["id"].as_str().unwrap_or_default().to_string();
    step(client, base_url, Method::GET, "/api/tasks?route=smoketest", None, StatusCode::OK).await?;
    step(client, base_url, Method::GET, "/api/routes", None, StatusCode::OK).await?;
    step(
        client,
        base_url,
        Method::DELETE,
        &format!("/api/tasks/{}?route=smoketest", task_id),
        None,
        StatusCode::OK,
    )
    .await?;

    // Vehículos
    let vehicle = step(
        client,
        base_url,
        Method::POST,
        "/api/vehicles",
        Some(json!({
            "number": "SMOKE-1",
            "length": 6,
            "width": 2,
            "height": 3,
            "weight": 3500,
            "idealFor": "pallets"
        })),
        StatusCode::CREATED,
    )
    .await?;
    step(client, base_url, Method::GET, "/api/vehicles", None, StatusCode::OK).await?;
    step(
        client,
        base_url,
        Method::DELETE,
        &format!("/api/vehicles/{}", vehicle["id"].as_str().unwrap_or_default()),
        None,
        StatusCode::OK,
    )
    .await?;

    // Asignaciones
    let assignment = step(
        client,
        base_url,
        Method::POST,
        "/api/assignments",
        Some(json!({ "route": "smoketest", "vehicle": "SMOKE-1", "driver": "tester" })),
        StatusCode::CREATED,
    )
    .await?;
    let assignment_path = format!("/api/assignments/{}", assignment["id"].as_str().unwrap_or_default());
    step(client, base_url, Method::GET, "/api/assignments?route=smoketest", None, StatusCode::OK).await?;
    step(
        client,
        base_url,
        Method::PUT,
        &assignment_path,
        Some(json!({ "route": "smoketest", "vehicle": "SMOKE-2", "driver": "tester" })),
        StatusCode::OK,
    )
    .await?;
    step(client, base_url, Method::DELETE, &assignment_path, None, StatusCode::OK).await?;
    step(client, base_url, Method::DELETE, &assignment_path, None, StatusCode::NOT_FOUND).await?;

    Ok(())
}
