use senha_server::{Config, SheetsClient, SubmitRequest, TicketService, catalog, printing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    senha_server::init_logger();

    // 2. Configuration
    let config = Config::from_env();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("");

    match command {
        "areas" => list_areas(&config).await?,
        "bairros" => list_neighborhoods(&config).await?,
        "emitir" => emitir(&config, &args[1..]).await?,
        _ => usage(),
    }

    Ok(())
}

fn usage() {
    println!("Distribuidor de Senhas");
    println!();
    println!("Comandos:");
    println!("  areas                      lista as áreas ativas");
    println!("  bairros                    lista os bairros");
    println!("  emitir [opções]            emite senhas e gera o ticket");
    println!();
    println!("Opções de emitir:");
    println!("  --area <nome>              área destino (repetível)");
    println!("  --nome <nome>              nome do participante");
    println!("  --telefone <numero>        telefone com 11 dígitos (DDD incluído)");
    println!("  --bairro <nome>            bairro (opcional)");
    println!("  --rede-social <@perfil>    rede social (opcional)");
    println!("  --email <email>            e-mail (opcional)");
    println!("  --saida <arquivo>          grava o documento ESC/POS gerado");
}

async fn list_areas(config: &Config) -> anyhow::Result<()> {
    let client = SheetsClient::from_config(config)?;
    let areas = catalog::active_areas(&client, &config.areas_sheet).await?;

    if areas.is_empty() {
        println!("Nenhuma área ativa encontrada na aba '{}'.", config.areas_sheet);
        return Ok(());
    }
    for area in areas {
        match area.max_tickets {
            Some(limit) => println!("{} -> {} (limite {})", area.name, area.sheet, limit),
            None => println!("{} -> {}", area.name, area.sheet),
        }
    }
    Ok(())
}

async fn list_neighborhoods(config: &Config) -> anyhow::Result<()> {
    let client = SheetsClient::from_config(config)?;
    for bairro in catalog::neighborhoods(&client, &config.neighborhoods_sheet).await? {
        println!("{}", bairro);
    }
    Ok(())
}

/// Parse `--flag value` pairs into a submission plus an output path
fn parse_emitir(args: &[String]) -> anyhow::Result<(SubmitRequest, Option<String>)> {
    let mut request = SubmitRequest::default();
    let mut output = None;

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| anyhow::anyhow!("valor ausente para {}", flag))?
            .clone();
        match flag.as_str() {
            "--area" => request.areas.push(value),
            "--nome" => request.name = value,
            "--telefone" => request.phone = value,
            "--bairro" => request.neighborhood = value,
            "--rede-social" => request.social = value,
            "--email" => request.email = value,
            "--saida" => output = Some(value),
            other => anyhow::bail!("opção desconhecida: {}", other),
        }
    }
    Ok((request, output))
}

async fn emitir(config: &Config, args: &[String]) -> anyhow::Result<()> {
    let (request, output) = parse_emitir(args)?;

    let client = SheetsClient::from_config(config)?;
    let service = TicketService::new(client, config);

    let outcome = service.submit(request).await?;

    for registration in &outcome.registrations {
        println!(
            "Área {} -> senha {} (registro {})",
            registration.area, registration.number, registration.registered_at
        );
    }

    for info in &outcome.exceeded {
        println!(
            "A área {} excedeu o limite de {} senhas (atual: {}).",
            info.area, info.limit, info.number
        );
    }

    match outcome.document {
        None => {
            if !outcome.exceeded.is_empty() {
                println!("O ticket não foi gerado porque limites foram atingidos.");
            }
        }
        Some(document) => {
            if let Some(path) = output {
                std::fs::write(&path, &document)?;
                println!("Documento gravado em {}", path);
            }

            match printing::forward_document(
                config.print_relay_url.as_deref(),
                config.print_relay_token.as_deref(),
                &document,
            )
            .await
            {
                Ok(true) => println!("Enviado automaticamente para impressão."),
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "print relay forward failed");
                    println!("Não foi possível imprimir automaticamente: {}", e);
                }
            }
        }
    }

    Ok(())
}
