use crate::model::{Category, Difficulty, Ingredient, Recipe, Step, WeatherBucket};

fn ingredient(name: &str, amount: &str) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        amount: amount.to_string(),
    }
}

fn step(title: &str, description: &str) -> Step {
    Step {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The recipes shipped with the application, served when the remote store
/// is unavailable and merged with remote records otherwise.
pub fn static_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "1".to_string(),
            name: "Pão de Queijo Latte".to_string(),
            country: "Brasil".to_string(),
            category: Category::Latte,
            difficulty: Difficulty::Medium,
            prep_time: "5 min".to_string(),
            description: "Um latte cremoso com um toque sutil de queijo canastra e mel, inspirado no café da manhã mineiro."
                .to_string(),
            image: "https://images.unsplash.com/photo-1541167760496-1628856ab772?q=80&w=1000&auto=format&fit=crop"
                .to_string(),
            ingredients: strings(&[
                "Café Espresso",
                "Leite Vaporizado",
                "Mel",
                "Queijo Canastra Ralado",
            ]),
            equipment: strings(&["Máquina de Espresso", "Vaporizador de Leite"]),
            detailed_ingredients: vec![
                ingredient("Café Espresso", "40ml"),
                ingredient("Leite Integral", "150ml"),
                ingredient("Mel de Flores Silvestres", "1 colher de chá"),
                ingredient("Queijo Canastra Ralado Fino", "1 pitada"),
            ],
            steps: vec![
                step("Base", "Prepare um espresso duplo em uma xícara grande."),
                step("Adoçar", "Misture o mel no espresso ainda quente até dissolver."),
                step("Texturizar", "Vaporize o leite até obter uma espuma sedosa."),
                step(
                    "Finalizar",
                    "Despeje o leite sobre o café e finalize com uma pitada de queijo canastra ralado por cima.",
                ),
            ],
            weather_suitability: vec![WeatherBucket::Cold, WeatherBucket::Neutral],
        },
        Recipe {
            id: "2".to_string(),
            name: "Cold Brew de Rapadura".to_string(),
            country: "Brasil".to_string(),
            category: Category::ColdBrew,
            difficulty: Difficulty::Easy,
            prep_time: "18h".to_string(),
            description: "Café extraído a frio por 18 horas, adoçado com rapadura derretida e um toque de limão cravo."
                .to_string(),
            image: "https://images.unsplash.com/photo-1517701604599-bb29b565090c?q=80&w=1000&auto=format&fit=crop"
                .to_string(),
            ingredients: strings(&["Café Moagem Grossa", "Água Gelada", "Rapadura", "Limão Cravo"]),
            equipment: strings(&["Pote de Vidro", "Filtro de Papel"]),
            detailed_ingredients: vec![
                ingredient("Café Moagem Grossa", "50g"),
                ingredient("Água Filtrada Gelada", "500ml"),
                ingredient("Xarope de Rapadura", "30ml"),
                ingredient("Rodela de Limão Cravo", "1 unidade"),
            ],
            steps: vec![
                step(
                    "Infusão",
                    "Misture o café e a água no pote e deixe na geladeira por 18 horas.",
                ),
                step("Filtragem", "Filtre o café usando um filtro de papel ou prensa francesa."),
                step(
                    "Xarope",
                    "Derreta a rapadura com um pouco de água quente para criar um xarope.",
                ),
                step("Servir", "Sirva com gelo, adicione o xarope e decore com o limão cravo."),
            ],
            weather_suitability: vec![WeatherBucket::Hot],
        },
        Recipe {
            id: "3".to_string(),
            name: "Espresso Mineiro".to_string(),
            country: "Brasil".to_string(),
            category: Category::Espresso,
            difficulty: Difficulty::Easy,
            prep_time: "2 min".to_string(),
            description: "Um espresso clássico servido com uma pequena fatia de doce de leite na borda da xícara."
                .to_string(),
            image: "https://images.unsplash.com/photo-1510707577719-5d68704a8d07?q=80&w=1000&auto=format&fit=crop"
                .to_string(),
            ingredients: strings(&["Café Grão Especial", "Doce de Leite Viçosa"]),
            equipment: strings(&["Máquina de Espresso"]),
            detailed_ingredients: vec![
                ingredient("Café Grão Especial (Torra Média)", "18g"),
                ingredient("Doce de Leite Viçosa", "1 colher de café"),
            ],
            steps: vec![
                step("Preparar", "Passe o doce de leite na borda interna da xícara de espresso."),
                step("Extrair", "Extraia o espresso diretamente na xícara preparada."),
                step(
                    "Degustar",
                    "Beba o café permitindo que o doce de leite se misture gradualmente.",
                ),
            ],
            weather_suitability: vec![
                WeatherBucket::Cold,
                WeatherBucket::Neutral,
                WeatherBucket::Rainy,
            ],
        },
        Recipe {
            id: "4".to_string(),
            name: "Cappuccino de Avelã e Cacau".to_string(),
            country: "Brasil".to_string(),
            category: Category::Cappuccino,
            difficulty: Difficulty::Medium,
            prep_time: "4 min".to_string(),
            description: "Equilíbrio perfeito entre o amargor do cacau mineiro e a doçura da avelã."
                .to_string(),
            image: "https://images.unsplash.com/photo-1534778101976-62847782c213?q=80&w=1000&auto=format&fit=crop"
                .to_string(),
            ingredients: strings(&["Espresso", "Leite", "Cacau em Pó", "Xarope de Avelã"]),
            equipment: strings(&["Máquina de Espresso", "Vaporizador"]),
            detailed_ingredients: vec![
                ingredient("Espresso", "30ml"),
                ingredient("Leite Vaporizado", "120ml"),
                ingredient("Cacau em Pó 70%", "1 colher de chá"),
                ingredient("Xarope de Avelã", "10ml"),
            ],
            steps: vec![
                step("Base", "Misture o xarope de avelã e o cacau no fundo da xícara."),
                step("Café", "Extraia o espresso por cima da mistura."),
                step("Leite", "Vaporize o leite e despeje criando uma camada espessa de espuma."),
            ],
            weather_suitability: vec![WeatherBucket::Cold, WeatherBucket::Rainy],
        },
        Recipe {
            id: "5".to_string(),
            name: "Affogato de Milho Verde".to_string(),
            country: "Brasil".to_string(),
            category: Category::Specialty,
            difficulty: Difficulty::Easy,
            prep_time: "3 min".to_string(),
            description: "Uma sobremesa ousada unindo o sorvete de milho verde artesanal com um espresso intenso."
                .to_string(),
            image: "https://images.unsplash.com/photo-1594631252845-29fc4cc8cde9?q=80&w=1000&auto=format&fit=crop"
                .to_string(),
            ingredients: strings(&["Espresso", "Sorvete de Milho Verde", "Canela"]),
            equipment: strings(&["Máquina de Espresso"]),
            detailed_ingredients: vec![
                ingredient("Espresso Quente", "40ml"),
                ingredient("Sorvete de Milho Verde", "1 bola grande"),
                ingredient("Canela em Pó", "a gosto"),
            ],
            steps: vec![
                step("Montagem", "Coloque a bola de sorvete em uma taça de vidro."),
                step("Contraste", "Extraia o espresso e despeje imediatamente sobre o sorvete."),
                step("Toque Final", "Polvilhe canela por cima e sirva com uma colher."),
            ],
            weather_suitability: vec![WeatherBucket::Hot, WeatherBucket::Neutral],
        },
    ]
}
