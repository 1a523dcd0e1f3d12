//! User-facing texts.

pub const USAGE: &str = "Привет! Я бот для создания презентаций.\n\
Использование: /make <тема> [кол-во слайдов]\n\
Пример: /make Французская революция 8\n\
Если тема заканчивается числом, возьми её в кавычки: /make \"Аполлон 11\" 5\n\
Можно просто прислать тему сообщением.";

pub const NEED_TOPIC: &str = "Укажи тему. Пример: /make Французская революция 8";

pub const NOT_FOUND: &str = "Не удалось найти информацию по этой теме.";

pub fn making_chunked(topic: &str, slide_count: usize) -> String {
    format!(
        "Создаю презентацию по теме: {} ({} слайдов)...",
        topic, slide_count
    )
}

pub fn making_flat(topic: &str) -> String {
    format!("Создаю презентацию по теме: {}...", topic)
}

pub fn caption(topic: &str) -> String {
    format!("Презентация по теме: {}", topic)
}

pub fn file_name(topic: &str) -> String {
    format!("{}.pptx", topic)
}
