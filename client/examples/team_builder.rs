use std::sync::Arc;

use anyhow::{Result, bail};
use pokedeck_client::{Backend, LogNotifier, Mode, PokemonRecord, TeamContext};

fn roster() -> Vec<Arc<PokemonRecord>> {
    [
        (25, "pikachu", "electric"),
        (6, "charizard", "fire"),
        (9, "blastoise", "water"),
        (3, "venusaur", "grass"),
        (143, "snorlax", "normal"),
        (131, "lapras", "water"),
        (149, "dragonite", "dragon"),
    ]
    .into_iter()
    .map(|(id, name, kind)| Arc::new(PokemonRecord::new(id, name).with_types([kind])))
    .collect()
}

fn print_team(context: &TeamContext) {
    let builder = context.builder();
    println!("\n[{}] {}", builder.mode().as_str(), builder.name());
    for (index, slot) in builder.slots().iter().enumerate() {
        match slot {
            Some(pokemon) => println!("  {index}: #{:03} {}", pokemon.id, pokemon.display_name()),
            None => println!("  {index}: -"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let backend = Backend::in_memory();
    let user = backend
        .accounts()
        .register("red", "red@example.com", "oak-lab")
        .await?;
    println!("Signed in as {}", user.email);

    let roster = roster();
    let mut context = TeamContext::new(&backend, Arc::new(LogNotifier), Default::default());

    context.start_creating();
    for pokemon in &roster[..6] {
        context.add_to_team(pokemon.clone());
    }
    context.update_team_name("Kanto Classics");
    print_team(&context);

    let saved = context.save_team().await;
    if !saved.success {
        bail!("save failed: {}", saved.message);
    }

    let teams = context.my_teams().await?;
    let Some(team) = teams.first() else {
        bail!("saved team not found");
    };

    // Swap Lapras out for Dragonite on the saved team
    context.start_editing(&team.id).await;
    context.remove_from_team(5).await;
    context.handle_add_pokemon(roster[6].clone()).await;
    print_team(&context);

    // A fresh context picks the edit back up from session storage
    let mut reloaded = TeamContext::new(&backend, Arc::new(LogNotifier), Default::default());
    if reloaded.resume_session() && reloaded.mode() == Mode::Editing {
        println!("\nResumed editing {}", reloaded.builder().name());
    }

    reloaded.toggle_favorite(&team.id).await;
    println!("\nFavorites: {}", reloaded.favorite_teams().await?.len());
    println!("Teams saved: {}", reloaded.total_teams().await?);

    Ok(())
}
