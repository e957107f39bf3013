//! Go modules.

use crate::badge::{catalog, BadgeKind, BadgeUnion, ShieldBadge};
use crate::manifest::{Configure, GoMod};
use crate::walk::{
    resolve_dependency, Context, DependencyResolver, ExtendedBadge, WalkError, Walker,
};
use std::path::Path;
use tracing::debug;

const TAG: &str = "Go";

const fn go_shield(
    id: &'static str,
    label: &'static str,
    color: &'static str,
    logo_color: &'static str,
    href: &'static str,
) -> BadgeUnion {
    BadgeUnion::shield(ShieldBadge::new(id, label, color, "go", logo_color, href))
}

pub const GIN: BadgeUnion = go_shield(
    "Gin",
    "Gin",
    "#ffffff",
    "blue",
    "https://github.com/gin-gonic/gin",
);
pub const FIBER: BadgeUnion = go_shield(
    "Fiber",
    "Fiber",
    "#1DBA90",
    "white",
    "https://github.com/gofiber/fiber",
);
pub const ECHO: BadgeUnion = go_shield(
    "Echo",
    "Echo",
    "#1D9BF0",
    "white",
    "https://github.com/labstack/echo",
);
pub const BEEGO: BadgeUnion = go_shield(
    "Beego",
    "Beego",
    "#0A74DA",
    "white",
    "https://github.com/beego/beego",
);
pub const IRIS: BadgeUnion = go_shield(
    "Iris",
    "Iris",
    "#5A4FCF",
    "white",
    "https://github.com/kataras/iris",
);
pub const CHI: BadgeUnion = go_shield(
    "Chi",
    "Chi",
    "#CCCCCC",
    "white",
    "https://github.com/go-chi/chi",
);
pub const REVEL: BadgeUnion = go_shield(
    "Revel",
    "Revel",
    "#E34F26",
    "white",
    "https://github.com/revel/revel",
);
pub const BUFFALO: BadgeUnion = go_shield(
    "Buffalo",
    "Buffalo",
    "#D22B2B",
    "white",
    "https://github.com/gobuffalo/buffalo",
);

pub const GORM: BadgeUnion = go_shield(
    "Gorm",
    "Gorm",
    "#5B3F78",
    "white",
    "https://github.com/go-gorm/gorm",
);
pub const SQLX: BadgeUnion = go_shield(
    "Sqlx",
    "Sqlx",
    "#7A42F4",
    "white",
    "https://github.com/jmoiron/sqlx",
);
pub const XORM: BadgeUnion = go_shield(
    "Xorm",
    "Xorm",
    "#5F7C8E",
    "white",
    "https://github.com/go-xorm/xorm",
);
pub const ENT: BadgeUnion = go_shield(
    "Ent",
    "Ent",
    "#A54C29",
    "white",
    "https://github.com/ent/ent",
);
pub const BEEGO_ORM: BadgeUnion = go_shield(
    "BeegoOrm",
    "Beego ORM",
    "#0A74DA",
    "white",
    "https://github.com/beego/beego",
);
pub const STORM: BadgeUnion = go_shield(
    "Storm",
    "Storm",
    "#5A67D8",
    "white",
    "https://github.com/asdine/storm",
);
pub const SQLBOILER: BadgeUnion = go_shield(
    "Sqlboiler",
    "Sqlboiler",
    "#FF3838",
    "white",
    "https://github.com/volatiletech/sqlboiler",
);

pub const SHIELD_RESOLVER: DependencyResolver = DependencyResolver {
    full: &[
        ("github.com/aws/aws-sdk-go-v2", ExtendedBadge::system(catalog::AMAZON_DYNAMODB)),
        ("github.com/appwrite/sdk-for-go", ExtendedBadge::system(catalog::APPWRITE)),
        ("github.com/arangodb/go-driver", ExtendedBadge::system(catalog::ARANGODB)),
        ("github.com/gocql/gocql", ExtendedBadge::system(catalog::APACHE_CASSANDRA)),
        ("github.com/ClickHouse/clickhouse-go", ExtendedBadge::system(catalog::CLICKHOUSE)),
        ("github.com/couchbase/gocb", ExtendedBadge::system(catalog::COUCHBASE)),
        ("firebase.google.com/go", ExtendedBadge::system(catalog::FIREBASE)),
        ("github.com/influxdata/influxdb-client-go", ExtendedBadge::system(catalog::INFLUXDB)),
        ("github.com/denisenkom/go-mssqldb", ExtendedBadge::system(catalog::MSSQL)),
        ("go.mongodb.org/mongo-driver", ExtendedBadge::system(catalog::MONGODB)),
        ("github.com/planetscale/planetscale-go", ExtendedBadge::system(catalog::PLANETSCALE)),
        ("github.com/go-sql-driver/mysql", ExtendedBadge::system(catalog::MYSQL)),
        ("github.com/pocketbase/pocketbase", ExtendedBadge::system(catalog::POCKETBASE)),
        ("github.com/lib/pq", ExtendedBadge::system(catalog::POSTGRES)),
        ("github.com/jackc/pgx/v5", ExtendedBadge::system(catalog::POSTGRES)),
        ("github.com/mattn/go-sqlite3", ExtendedBadge::system(catalog::SQLITE)),
        ("github.com/supabase/postgrest-go", ExtendedBadge::system(catalog::SUPABASE)),
        ("github.com/gin-gonic/gin", ExtendedBadge::dependency(GIN)),
        ("github.com/gofiber/fiber", ExtendedBadge::dependency(FIBER)),
        ("github.com/gofiber/fiber/v2", ExtendedBadge::dependency(FIBER)),
        ("github.com/labstack/echo", ExtendedBadge::dependency(ECHO)),
        ("github.com/labstack/echo/v4", ExtendedBadge::dependency(ECHO)),
        ("github.com/beego/beego/v2/orm", ExtendedBadge::dependency(BEEGO_ORM)),
        ("github.com/beego/beego", ExtendedBadge::dependency(BEEGO)),
        ("github.com/beego/beego/v2", ExtendedBadge::dependency(BEEGO)),
        ("github.com/kataras/iris", ExtendedBadge::dependency(IRIS)),
        ("github.com/go-chi/chi", ExtendedBadge::dependency(CHI)),
        ("github.com/go-chi/chi/v5", ExtendedBadge::dependency(CHI)),
        ("github.com/revel/revel", ExtendedBadge::dependency(REVEL)),
        ("github.com/gobuffalo/buffalo", ExtendedBadge::dependency(BUFFALO)),
        ("gocv.io/x/gocv", ExtendedBadge::system(catalog::OPENCV)),
        ("github.com/go-gorm/gorm", ExtendedBadge::dependency(GORM)),
        ("gorm.io/gorm", ExtendedBadge::dependency(GORM)),
        ("github.com/jmoiron/sqlx", ExtendedBadge::dependency(SQLX)),
        ("github.com/go-xorm/xorm", ExtendedBadge::dependency(XORM)),
        ("xorm.io/xorm", ExtendedBadge::dependency(XORM)),
        ("github.com/ent/ent", ExtendedBadge::dependency(ENT)),
        ("entgo.io/ent", ExtendedBadge::dependency(ENT)),
        ("github.com/asdine/storm", ExtendedBadge::dependency(STORM)),
        ("github.com/volatiletech/sqlboiler", ExtendedBadge::dependency(SQLBOILER)),
        ("github.com/volatiletech/sqlboiler/v4", ExtendedBadge::dependency(SQLBOILER)),
    ],
    partial: &[
        ("github.com/elastic/go-elasticsearch", ExtendedBadge::system(catalog::ELASTICSEARCH)),
        ("github.com/golang-jwt/jwt", ExtendedBadge::system(catalog::JWT)),
        ("github.com/go-redis/redis", ExtendedBadge::system(catalog::REDIS)),
        ("github.com/redis/go-redis", ExtendedBadge::system(catalog::REDIS)),
        ("github.com/go-gl/gl", ExtendedBadge::system(catalog::OPENGL)),
        ("github.com/neo4j/neo4j-go-driver", ExtendedBadge::system(catalog::NEO4J)),
        ("github.com/graphql-go/graphql", ExtendedBadge::system(catalog::GRAPHQL)),
        ("github.com/99designs/gqlgen", ExtendedBadge::system(catalog::GRAPHQL)),
    ],
    fuzzy: &[
        ("prometheus", ExtendedBadge::system(catalog::PROMETHEUS)),
        ("swaggo", ExtendedBadge::system(catalog::SWAGGER)),
    ],
};

pub const WALKER: Walker = Walker {
    name: "go",
    exts: &[".go"],
    files: &["go.mod", "go.sum", "go.work"],
    parse_ext: Some(parse_ext),
    parse_file: Some(parse_file),
    ..Walker::EMPTY
};

fn parse_ext(_: &Path, _: &str, ctx: &mut Context) -> Result<(), WalkError> {
    ctx.mark(TAG, &catalog::GO);
    Ok(())
}

fn parse_file(path: &Path, file: &str, ctx: &mut Context) -> Result<(), WalkError> {
    if file != "go.mod" {
        ctx.mark(TAG, &catalog::GO);
        return Ok(());
    }

    let module = GoMod::load(path)?;
    ctx.mark_versioned(
        TAG,
        &catalog::GO,
        module.environment("go").map(|e| e.version()),
    );
    debug!(module = module.project_name(), "parsed go.mod");

    resolve_dependency(
        ctx,
        &[
            (BadgeKind::Shield, &SHIELD_RESOLVER),
            (BadgeKind::Badgen, &DependencyResolver::EMPTY),
        ],
        &module,
        TAG,
    )?;
    Ok(())
}
