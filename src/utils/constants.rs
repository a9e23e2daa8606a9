/// Raw record field names
pub const FIELD_LATITUDE: &str = "latitud";
pub const FIELD_LONGITUDE: &str = "longitud";
pub const FIELD_VERTICES: &str = "vertices";
pub const FIELD_MUNICIPALITY: &str = "municipio";
pub const FIELD_REGION: &str = "region";
pub const FIELD_STATUS: &str = "estado";
pub const FIELD_AREA: &str = "superficie";
pub const FIELD_START_DATE: &str = "fecha_inicio";
pub const FIELD_ISSUE_DATE: &str = "fecha_expedicion";
pub const FIELD_END_DATE: &str = "fecha_fin";
pub const FIELD_LOT_NAME: &str = "nombre_lote";
pub const FIELD_TITLE: &str = "titulo";
pub const FIELD_HOLDER: &str = "titular";
pub const FIELD_ROW_NUMBER: &str = "No.";
pub const FIELD_ORDER_NAME: &str = "nombre";
pub const FIELD_ORDER_NUMBER: &str = "num_orden";
pub const FIELD_BENEFICIARY: &str = "a_favor";
pub const FIELD_PUBLICATION: &str = "publ_dof";

/// Derived field names written on located records
pub const FIELD_COORDS: &str = "coords";
pub const FIELD_POLYGON: &str = "coordenadasPoligono";
pub const FIELD_KIND: &str = "tipo";
pub const KIND_EXPLORATION_ORDER: &str = "orden_exploracion";

/// `estado` value of an active concession
pub const STATUS_ACTIVE: &str = "Vigente";

/// Two-digit years above this pivot belong to the 1900s
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

/// Free-text search is ignored below this many characters
pub const MIN_SEARCH_TERM_CHARS: usize = 3;

/// Display and export defaults
pub const COORDINATE_DECIMALS: usize = 6;
pub const EXPORT_FILE_PREFIX: &str = "Concesiones_y_Ordenes_Mineras";
pub const EXPORT_FILE_EXTENSION: &str = "xlsx";

/// Initial map view over the state of Guerrero
pub const DEFAULT_VIEW: RegionView = RegionView {
    name: "Guerrero",
    center: [-99.5008, 17.5509],
    zoom: 8.0,
};

/// Centre (`[longitude, latitude]`) and zoom used when navigating to a region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionView {
    pub name: &'static str,
    pub center: [f64; 2],
    pub zoom: f64,
}

pub const REGION_VIEWS: &[RegionView] = &[
    RegionView {
        name: "Acapulco",
        center: [-99.8901, 16.8531],
        zoom: 11.0,
    },
    RegionView {
        name: "Norte",
        center: [-99.5398, 18.3444],
        zoom: 9.0,
    },
    RegionView {
        name: "Centro",
        center: [-99.5008, 17.5509],
        zoom: 9.0,
    },
    RegionView {
        name: "Montaña",
        center: [-98.5761, 17.5453],
        zoom: 9.0,
    },
    RegionView {
        name: "Costa Chica",
        center: [-98.4102, 16.6850],
        zoom: 9.0,
    },
    RegionView {
        name: "Costa Grande",
        center: [-101.5518, 17.6413],
        zoom: 9.0,
    },
    RegionView {
        name: "Tierra Caliente",
        center: [-100.5, 18.2],
        zoom: 9.0,
    },
    RegionView {
        name: "Sierra",
        center: [-99.85, 17.65],
        zoom: 10.0,
    },
];

/// Municipalities of each region, used when a record carries no `region` field
pub const REGION_MUNICIPALITIES: &[(&str, &[&str])] = &[
    ("Acapulco", &["Acapulco de Juárez"]),
    (
        "Norte",
        &[
            "Cocula",
            "Iguala de la Independencia",
            "Taxco de Alarcón",
            "Teloloapan",
            "Buenavista de Cuéllar",
            "Tepecoacuilco de Trujano",
            "Ixcateopan de Cuauhtémoc",
        ],
    ),
    (
        "Centro",
        &[
            "Chilpancingo de los Bravo",
            "Eduardo Neri",
            "Zitlala",
            "Tixtla de Guerrero",
            "Mochitlán",
            "Quechultenango",
        ],
    ),
    (
        "Montaña",
        &[
            "Tlapa de Comonfort",
            "Metlatónoc",
            "Cochoapa el Grande",
            "Iliatenco",
            "Alpoyeca",
        ],
    ),
    (
        "Costa Chica",
        &[
            "Ometepec",
            "Cuajinicuilapa",
            "Azoyú",
            "San Marcos",
            "Copala",
            "Marquelia",
            "Florencio Villarreal",
        ],
    ),
    (
        "Costa Grande",
        &[
            "Zihuatanejo de Azueta",
            "Petatlán",
            "Tecpán de Galeana",
            "Atoyac de Álvarez",
            "Coyuca de Benítez",
            "La Unión de Isidoro Montes de Oca",
        ],
    ),
    (
        "Tierra Caliente",
        &[
            "Tlalchapa",
            "Arcelia",
            "Tlapehuala",
            "San Miguel Totolapan",
            "Pungarabato",
            "Ajuchitlán del Progreso",
            "Coyuca de Catalán",
        ],
    ),
    (
        "Sierra",
        &["General Heliodoro Castillo", "Leonardo Bravo"],
    ),
];
