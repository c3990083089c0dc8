//! Table definitions and insert statements.

pub(super) const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS Systems (
    SystemAddress INTEGER PRIMARY KEY,
    StarSystem    TEXT NOT NULL UNIQUE,
    Body          TEXT,
    BodyID        INTEGER,
    BodyType      TEXT,
    ArrivedAt     TEXT
);

CREATE TABLE IF NOT EXISTS Stars (
    ID                 INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    ParentID           INTEGER,
    ParentType         TEXT,
    BodyName           TEXT UNIQUE,
    BodyID             INTEGER,
    Parents            TEXT,
    SystemAddress      INTEGER,
    StarType           TEXT,
    Subclass           INTEGER,
    StellarMass        REAL,
    Radius             REAL,
    AbsoluteMagnitude  REAL,
    AgeMY              REAL,
    SurfaceTemperature REAL,
    Luminosity         TEXT,
    SemiMajorAxis      REAL,
    Eccentricity       REAL,
    OrbitalInclination REAL,
    Periapsis          REAL,
    OrbitalPeriod      REAL,
    RotationPeriod     REAL,
    AxialTilt          REAL,
    Rings              TEXT,
    WasDiscovered      BOOLEAN,
    WasMapped          BOOLEAN
);

CREATE TABLE IF NOT EXISTS Bodies (
    ID                    INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    ParentID              INTEGER,
    ParentType            TEXT,
    BodyName              TEXT NOT NULL UNIQUE,
    BodyID                INTEGER,
    Parents               TEXT,
    SystemAddress         INTEGER,
    TidalLock             BOOLEAN,
    TerraformState        TEXT,
    PlanetClass           TEXT,
    Atmosphere            TEXT,
    AtmosphereType        TEXT,
    AtmosphereComposition TEXT,
    Volcanism             TEXT,
    MassEM                REAL,
    Radius                REAL,
    SurfaceGravity        REAL,
    SurfaceTemperature    REAL,
    SurfacePressure       REAL,
    Landable              BOOLEAN,
    Materials             TEXT,
    BodyComposition       TEXT,
    SemiMajorAxis         REAL,
    Eccentricity          REAL,
    OrbitalInclination    REAL,
    Periapsis             REAL,
    OrbitalPeriod         REAL,
    RotationPeriod        REAL,
    AxialTilt             REAL,
    Rings                 TEXT,
    WasDiscovered         BOOLEAN,
    WasMapped             BOOLEAN
);
";

pub(super) const INSERT_SYSTEM: &str = "
INSERT INTO Systems (SystemAddress, StarSystem, Body, BodyID, BodyType, ArrivedAt)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

pub(super) const INSERT_STAR: &str = "
INSERT INTO Stars (
    ParentID, ParentType, BodyName, BodyID, Parents, SystemAddress, StarType, Subclass,
    StellarMass, Radius, AbsoluteMagnitude, AgeMY, SurfaceTemperature, Luminosity,
    SemiMajorAxis, Eccentricity, OrbitalInclination, Periapsis, OrbitalPeriod,
    RotationPeriod, AxialTilt, Rings, WasDiscovered, WasMapped
)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18,
        ?19, ?20, ?21, ?22, ?23, ?24)";

pub(super) const INSERT_BODY: &str = "
INSERT INTO Bodies (
    ParentID, ParentType, BodyName, BodyID, Parents, SystemAddress, TidalLock,
    TerraformState, PlanetClass, Atmosphere, AtmosphereType, AtmosphereComposition,
    Volcanism, MassEM, Radius, SurfaceGravity, SurfaceTemperature, SurfacePressure,
    Landable, Materials, BodyComposition, SemiMajorAxis, Eccentricity,
    OrbitalInclination, Periapsis, OrbitalPeriod, RotationPeriod, AxialTilt, Rings,
    WasDiscovered, WasMapped
)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18,
        ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28, ?29, ?30, ?31)";
