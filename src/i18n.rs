//! User-facing message translations.
//!
//! Every string the bot sends on its own (as opposed to data from the ranking API)
//! is looked up here by key so a guild's language setting applies consistently.

use crate::model::guild_settings::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    UnknownError,
    PageLimitReached,
    NoResults,
    LevelNotFound,
    PlayerNotFound,
    NoPrivileges,
    SuperuserOnly,
    ForeignSession,
    LanguageChanged,
    PrefixChanged,
    InvalidPrefix,
    PresenceUpdated,
    MissingOption,
    SelectDemon,
    SelectPlayer,
    SelectCountry,
    SelectCommand,
    Page,
    Of,
    Ranking,
    MainList,
    ExtendedList,
    LegacyList,
    SearchResults,
    Nationalities,
    CountryStats,
    Countries,
    Help,
    HelpIntro,
    About,
    AboutBody,
    Position,
    Requirement,
    Publisher,
    Verifier,
    FirstVictor,
    Unknown,
    Rank,
    Score,
    Stats,
    Hardest,
    Completed,
    Progress,
    Verified,
    Nothing,
    Video,
    LevelId,
    Players,
    CommandsServed,
    More,
}

impl Language {
    /// Looks up a message in this language.
    pub fn text(self, key: Text) -> &'static str {
        match self {
            Language::English => english(key),
            Language::Spanish => spanish(key),
        }
    }
}

fn english(key: Text) -> &'static str {
    match key {
        Text::UnknownError => "An unknown error has occurred",
        Text::PageLimitReached => "The page limit has been reached",
        Text::NoResults => "No results were found",
        Text::LevelNotFound => "The level could not be found",
        Text::PlayerNotFound => "The player could not be found",
        Text::NoPrivileges => "You need to be the server owner or an administrator to do this",
        Text::SuperuserOnly => "This command is reserved for the bot owner",
        Text::ForeignSession => "This menu belongs to someone else, run the command yourself",
        Text::LanguageChanged => "The language has been changed to English",
        Text::PrefixChanged => "The prefix has been changed",
        Text::InvalidPrefix => "The prefix must be 1 to 3 characters without spaces",
        Text::PresenceUpdated => "The bot activity has been updated",
        Text::MissingOption => "Provide either a position or a name",
        Text::SelectDemon => "Select a demon",
        Text::SelectPlayer => "Select a player",
        Text::SelectCountry => "Select a country",
        Text::SelectCommand => "Select a command",
        Text::Page => "Page",
        Text::Of => "of",
        Text::Ranking => "International ranking",
        Text::MainList => "Main List",
        Text::ExtendedList => "Extended List",
        Text::LegacyList => "Legacy List",
        Text::SearchResults => "Search results",
        Text::Nationalities => "Nationalities",
        Text::CountryStats => "Country stats",
        Text::Countries => "Countries",
        Text::Help => "Help",
        Text::HelpIntro => "Pick a command from the menu to see what it does.",
        Text::About => "About",
        Text::AboutBody => "PointerBot brings the Pointercrate demon list to Discord: \
            browse the list, look up levels and players, and compare countries.",
        Text::Position => "Position",
        Text::Requirement => "Requirement",
        Text::Publisher => "Publisher",
        Text::Verifier => "Verifier",
        Text::FirstVictor => "First victor",
        Text::Unknown => "unknown",
        Text::Rank => "Demonlist rank",
        Text::Score => "Demonlist score",
        Text::Stats => "Demonlist stats",
        Text::Hardest => "Hardest demon",
        Text::Completed => "Demons completed",
        Text::Progress => "Progress on",
        Text::Verified => "Demons verified",
        Text::Nothing => "None",
        Text::Video => "Video",
        Text::LevelId => "Level ID",
        Text::Players => "Players",
        Text::CommandsServed => "Commands served",
        Text::More => "more",
    }
}

fn spanish(key: Text) -> &'static str {
    match key {
        Text::UnknownError => "Ha ocurrido un error desconocido",
        Text::PageLimitReached => "Se ha alcanzado el límite de páginas",
        Text::NoResults => "No se encontraron resultados",
        Text::LevelNotFound => "No se pudo encontrar el nivel",
        Text::PlayerNotFound => "No se pudo encontrar el jugador",
        Text::NoPrivileges => "Necesitas ser el dueño del servidor o un administrador para hacer esto",
        Text::SuperuserOnly => "Este comando está reservado para el dueño del bot",
        Text::ForeignSession => "Este menú pertenece a otra persona, ejecuta el comando tú mismo",
        Text::LanguageChanged => "El idioma ha sido cambiado a Español",
        Text::PrefixChanged => "El prefijo ha sido cambiado",
        Text::InvalidPrefix => "El prefijo debe tener de 1 a 3 caracteres sin espacios",
        Text::PresenceUpdated => "La actividad del bot ha sido actualizada",
        Text::MissingOption => "Indica una posición o un nombre",
        Text::SelectDemon => "Selecciona un demon",
        Text::SelectPlayer => "Selecciona un jugador",
        Text::SelectCountry => "Selecciona un país",
        Text::SelectCommand => "Selecciona un comando",
        Text::Page => "Página",
        Text::Of => "de",
        Text::Ranking => "Ranking internacional",
        Text::MainList => "Lista principal",
        Text::ExtendedList => "Lista extendida",
        Text::LegacyList => "Lista legacy",
        Text::SearchResults => "Resultados de búsqueda",
        Text::Nationalities => "Nacionalidades",
        Text::CountryStats => "Estadísticas de",
        Text::Countries => "Países",
        Text::Help => "Ayuda",
        Text::HelpIntro => "Elige un comando del menú para ver qué hace.",
        Text::About => "Acerca de",
        Text::AboutBody => "PointerBot trae la demon list de Pointercrate a Discord: \
            recorre la lista, busca niveles y jugadores, y compara países.",
        Text::Position => "Posición",
        Text::Requirement => "Requisito",
        Text::Publisher => "Publicador",
        Text::Verifier => "Verificador",
        Text::FirstVictor => "Primer victor",
        Text::Unknown => "desconocido",
        Text::Rank => "Rango en la lista",
        Text::Score => "Puntuación",
        Text::Stats => "Estadísticas",
        Text::Hardest => "Demon más difícil",
        Text::Completed => "Demons completados",
        Text::Progress => "Progreso en",
        Text::Verified => "Demons verificados",
        Text::Nothing => "Ninguno",
        Text::Video => "Video",
        Text::LevelId => "ID del nivel",
        Text::Players => "Jugadores",
        Text::CommandsServed => "Comandos atendidos",
        Text::More => "más",
    }
}
