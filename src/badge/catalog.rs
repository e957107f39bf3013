//! Technology badge catalog.
//!
//! Every entry is a `Copy` constant; selecting one for a walk always yields a
//! fresh [`Badge`](super::Badge), so versions set during a walk stay local to
//! it. Badges that only one detector uses live next to that detector.

use super::{BadgeUnion, BadgenBadge, ShieldBadge, ShieldStyle};

const fn shield(
    id: &'static str,
    label: &'static str,
    color: &'static str,
    logo: &'static str,
    logo_color: &'static str,
    href: &'static str,
) -> BadgeUnion {
    BadgeUnion::shield(ShieldBadge::new(id, label, color, logo, logo_color, href))
}

pub const ADONIS_JS: BadgeUnion = shield(
    "AdonisJS",
    "AdonisJS",
    "#220052",
    "adonisjs",
    "white",
    "https://adonisjs.com/",
);

pub const AIOHTTP: BadgeUnion = shield(
    "Aiohttp",
    "Aiohttp",
    "#2C5BB4",
    "aiohttp",
    "white",
    "https://aiohttp.readthedocs.io/en/stable/",
);

pub const ALPINE_JS: BadgeUnion = shield(
    "Alpine.js",
    "Alpine.js",
    "white",
    "alpinedotjs",
    "#8BC0D0",
    "https://alpinejs.dev/",
);

pub const AMAZON_DYNAMODB: BadgeUnion = shield(
    "AmazonDynamoDB",
    "Amazon DynamoDB",
    "#4053D6",
    "Amazon DynamoDB",
    "white",
    "https://aws.amazon.com/dynamodb/",
);

pub const ANDROID: BadgeUnion = shield(
    "Android",
    "Android",
    "#3DDC84",
    "android",
    "white",
    "https://www.android.com/",
);

pub const ANGULAR: BadgeUnion = shield(
    "Angular",
    "Angular",
    "#DD0031",
    "angular",
    "white",
    "https://angular.io/",
);

pub const ANT_DESIGN: BadgeUnion = shield(
    "Ant-Design",
    "AntDesign",
    "#0170FE",
    "ant-design",
    "white",
    "https://ant.design/",
);

pub const APACHE_CASSANDRA: BadgeUnion = shield(
    "ApacheCassandra",
    "cassandra",
    "#1287B1",
    "apache-cassandra",
    "white",
    "https://cassandra.apache.org/",
);

pub const APACHE_HADOOP: BadgeUnion = shield(
    "Apache Hadoop",
    "Apache Hadoop",
    "#66CCFF",
    "apachehadoop",
    "black",
    "https://hadoop.apache.org/",
);

pub const APACHE_HIVE: BadgeUnion = shield(
    "Apache Hive",
    "Apache Hive",
    "#FDEE21",
    "apachehive",
    "black",
    "https://hive.apache.org/",
);

pub const APACHE_KAFKA: BadgeUnion = shield(
    "Apache Kafka",
    "Apache Kafka",
    "000000",
    "apachekafka",
    "white",
    "https://kafka.apache.org/",
);

pub const APACHE_MAVEN: BadgeUnion = shield(
    "Apache Maven",
    "Apache Maven",
    "#C71A36",
    "apache-maven",
    "white",
    "https://maven.apache.org/",
);

pub const APACHE_SPARK: BadgeUnion = BadgeUnion::shield(
    ShieldBadge::new(
        "Apache Spark",
        "Apache Spark",
        "#FDEE21",
        "apachespark",
        "black",
        "https://spark.apache.org/",
    )
    .style(ShieldStyle::FlatSquare)
);

pub const APACHE_TOMCAT: BadgeUnion = shield(
    "Apache Tomcat",
    "Apache Tomcat",
    "#F8DC75",
    "apache-tomcat",
    "black",
    "https://tomcat.apache.org/",
);

pub const APOLLO_GRAPHQL: BadgeUnion = shield(
    "Apollo-GraphQL",
    "Apollo GraphQL",
    "#311C87",
    "apollo-graphql",
    "white",
    "https://www.apollographql.com/",
);

pub const APPWRITE: BadgeUnion = shield(
    "Appwrite",
    "Appwrite",
    "#FD366E",
    "appwrite",
    "white",
    "https://appwrite.io/",
);

pub const ARANGODB: BadgeUnion = shield(
    "ArangoDB",
    "ArangoDB",
    "#DDE072",
    "arangodb",
    "white",
    "https://www.arangodb.com/",
);

pub const ASTRO: BadgeUnion = shield(
    "Astro",
    "Astro",
    "#2C2052",
    "astro",
    "white",
    "https://astro.build/",
);

pub const AURELIA: BadgeUnion = shield(
    "Aurelia",
    "Aurelia",
    "#ED2B88",
    "aurelia",
    "white",
    "https://aurelia.io/",
);

pub const BASH: BadgeUnion = BadgeUnion::shield(
    ShieldBadge::new(
        "BashScript",
        "Bash Script",
        "#121011",
        "gnu-bash",
        "white",
        "https://www.gnu.org/software/bash/",
    )
)
.with_badgen(BadgenBadge::new(
    "BashScript",
    "bash",
    "black",
    "terminal",
    "https://www.gnu.org/software/bash/",
));

pub const BLAZOR: BadgeUnion = shield(
    "Blazor",
    "Blazor",
    "#5C2D91",
    "blazor",
    "white",
    "https://dotnet.microsoft.com/en-us/apps/aspnet/web-apps/blazor",
);

pub const BOOTSTRAP: BadgeUnion = shield(
    "Bootstrap",
    "Bootstrap",
    "#8511FA",
    "bootstrap",
    "white",
    "https://getbootstrap.com/",
);

pub const BUEFY: BadgeUnion = shield(
    "Buefy",
    "Buefy",
    "#7957D5",
    "buefy",
    "#48289E",
    "https://buefy.org/",
);

pub const BULMA: BadgeUnion = shield(
    "Bulma",
    "Bulma",
    "#00D0B1",
    "bulma",
    "white",
    "https://bulma.io/",
);

pub const BUN: BadgeUnion = shield("Bun", "Bun", "#000000", "bun", "white", "https://bun.sh/");

pub const C: BadgeUnion = shield(
    "C",
    "C",
    "#00599C",
    "c",
    "white",
    "https://en.wikipedia.org/wiki/C_(programming_language)",
);

pub const CHAKRA_UI: BadgeUnion = shield(
    "Chakra",
    "Chakra UI",
    "#4ED1C5",
    "chakraui",
    "white",
    "https://chakra-ui.com/",
);

pub const CHART_JS: BadgeUnion = shield(
    "Chart.js",
    "Chart.js",
    "#F5788D",
    "chart.js",
    "white",
    "https://www.chartjs.org/",
);

pub const CLICKHOUSE: BadgeUnion = shield(
    "ClickHouse",
    "ClickHouse",
    "#FFCC01",
    "clickhouse",
    "white",
    "https://clickhouse.com/",
);

pub const CLOJURE: BadgeUnion = shield(
    "Clojure",
    "Clojure",
    "#Clojure",
    "clojure",
    "Clojure",
    "https://clojure.org/",
);

pub const CMAKE: BadgeUnion = shield(
    "CMake",
    "CMake",
    "#008FBA",
    "cmake",
    "white",
    "https://cmake.org/",
);

pub const CODEIGNITER: BadgeUnion = shield(
    "Code-Igniter",
    "Code Igniter",
    "#EF4223",
    "codeIgniter",
    "white",
    "https://codeigniter.com/",
);

pub const COUCHBASE: BadgeUnion = shield(
    "Couchbase",
    "Couchbase",
    "#EA2328",
    "couchbase",
    "white",
    "https://www.couchbase.com/",
);

pub const CPP: BadgeUnion = shield("C++", "C++", "#00599C", "c++", "white", "https://isocpp.org/");

pub const CRYSTAL: BadgeUnion = shield(
    "Crystal",
    "Crystal",
    "#000000",
    "crystal",
    "white",
    "https://crystal-lang.org/",
);

pub const CSHARP: BadgeUnion = shield(
    "CSharp",
    "C#",
    "#239120",
    "csharp",
    "white",
    "https://learn.microsoft.com/en-us/dotnet/csharp/",
);

pub const CSS3: BadgeUnion = shield(
    "CSS3",
    "CSS3",
    "#1572B6",
    "css3",
    "white",
    "https://www.w3.org/Style/CSS/",
);

pub const CUDA: BadgeUnion = shield(
    "nVIDIA",
    "CUDA",
    "#000000",
    "nvidia",
    "green",
    "https://developer.nvidia.com/cuda-zone",
);

pub const DAISYUI: BadgeUnion = shield(
    "DaisyUI",
    "DaisyUI",
    "#5A0EF8",
    "daisyui",
    "white",
    "https://daisyui.com/",
);

pub const DART: BadgeUnion = shield(
    "Dart",
    "Dart",
    "#0175C2",
    "dart",
    "white",
    "https://dart.dev/",
);

pub const DENO: BadgeUnion = shield(
    "Deno JS",
    "Deno JS",
    "000000",
    "deno",
    "white",
    "https://deno.land/",
);

pub const DIRECTUS: BadgeUnion = shield(
    "Directus",
    "Directus",
    "#64F",
    "directus",
    "white",
    "https://directus.io/",
);

pub const DOCKER: BadgeUnion = BadgeUnion::shield(
    ShieldBadge::new(
        "Docker",
        "Docker",
        "#0db7ed",
        "docker",
        "white",
        "https://www.docker.com/",
    )
)
.with_badgen(BadgenBadge::new(
    "Docker",
    "docker",
    "blue",
    "docker",
    "https://www.docker.com/",
));

pub const DOTNET: BadgeUnion = shield(
    ".NET",
    ".NET",
    "#5C2D91",
    ".net",
    "white",
    "https://dotnet.microsoft.com/",
);

pub const EJS: BadgeUnion = shield(
    "EJS",
    "EJS",
    "#B4CA65",
    "ejs",
    "black",
    "https://www.embeddedjs.com/",
);

pub const ELASTICSEARCH: BadgeUnion = shield(
    "ElasticSearch",
    "ElasticSearch",
    "#005571",
    "elasticsearch",
    "white",
    "https://www.elastic.co/elasticsearch/",
);

pub const ELECTRON: BadgeUnion = shield(
    "Electron.js",
    "Electron.js",
    "#191970",
    "electron",
    "white",
    "https://www.electronjs.org/",
);

pub const ELIXIR: BadgeUnion = shield(
    "Elixir",
    "Elixir",
    "#4B275F",
    "elixir",
    "white",
    "https://elixir-lang.org/",
);

pub const ELM: BadgeUnion = shield(
    "Elm",
    "Elm",
    "#60B5CC",
    "elm",
    "white",
    "https://elm-lang.org/",
);

pub const EMBER: BadgeUnion = shield(
    "Ember",
    "Ember",
    "#1C1E24",
    "ember.js",
    "#D04A37",
    "https://emberjs.com/",
);

pub const ERLANG: BadgeUnion = shield(
    "Erlang",
    "Erlang",
    "white",
    "erlang",
    "#A90533",
    "https://www.erlang.org/",
);

pub const ESBUILD: BadgeUnion = shield(
    "Esbuild",
    "Esbuild",
    "#FFCF00",
    "esbuild",
    "black",
    "https://esbuild.github.io/",
);

pub const EXPO: BadgeUnion = shield(
    "Expo",
    "Expo",
    "#1C1E24",
    "expo",
    "#D04A37",
    "https://expo.dev/",
);

pub const EXPRESS: BadgeUnion = shield(
    "Express.js",
    "Express.js",
    "#404D59",
    "express",
    "#61DAFB",
    "https://expressjs.com/",
);

pub const FASTIFY: BadgeUnion = shield(
    "Fastify",
    "Fastify",
    "#000000",
    "fastify",
    "white",
    "https://www.fastify.io/",
);

pub const FIREBASE: BadgeUnion = shield(
    "Firebase",
    "Firebase",
    "#A08021",
    "firebase",
    "white",
    "https://firebase.google.com/",
);

pub const FLUTTER: BadgeUnion = shield(
    "Flutter",
    "Flutter",
    "#02569B",
    "flutter",
    "white",
    "https://flutter.dev/",
);

pub const FORTRAN: BadgeUnion = shield(
    "Fortran",
    "Fortran",
    "#734F96",
    "fortran",
    "white",
    "https://fortran-lang.org/",
);

pub const FRAMEWORK7: BadgeUnion = shield(
    "Framework7",
    "Framework7",
    "#EE350F",
    "framework7",
    "white",
    "https://framework7.io/",
);

pub const GATSBY: BadgeUnion = shield(
    "Gatsby",
    "Gatsby",
    "#663399",
    "gatsby",
    "white",
    "https://www.gatsbyjs.com/",
);

pub const GDSCRIPT: BadgeUnion = shield(
    "GDScript",
    "GDScript",
    "#74267B",
    "godotengine",
    "white",
    "https://godotengine.org/",
);

pub const GO: BadgeUnion = shield("Go", "Go", "#00ADD8", "go", "white", "https://golang.org/");

pub const GRADLE: BadgeUnion = shield(
    "Gradle",
    "Gradle",
    "#02303A",
    "gradle",
    "white",
    "https://gradle.org/",
);

pub const GRAPHQL: BadgeUnion = shield(
    "GraphQL",
    "GraphQL",
    "#E10098",
    "graphql",
    "white",
    "https://graphql.org/",
);

pub const GRAV: BadgeUnion = shield(
    "Grav",
    "Grav",
    "#FFFFFF",
    "grav",
    "#221E1F",
    "https://getgrav.org/",
);

pub const GREENSOCK: BadgeUnion = shield(
    "Green Sock",
    "Green Sock",
    "#88CE02",
    "greensock",
    "white",
    "https://greensock.com/",
);

pub const GROOVY: BadgeUnion = shield(
    "ApacheGroovy",
    "Apache Groovy",
    "#4298B8",
    "Apache Groovy",
    "white",
    "https://groovy-lang.org/",
);

pub const GULP: BadgeUnion = shield(
    "Gulp",
    "Gulp",
    "#CF4647",
    "gulp",
    "white",
    "https://gulpjs.com/",
);

pub const GUTENBERG: BadgeUnion = shield(
    "Gutenberg",
    "Gutenberg",
    "#077CB2",
    "gutenberg",
    "white",
    "https://wordpress.org/gutenberg/",
);

pub const HANDLEBARS: BadgeUnion = shield(
    "Handlebars",
    "Handlebars",
    "#000000",
    "Handlebars.js",
    "white",
    "https://handlebarsjs.com/",
);

pub const HASKELL: BadgeUnion = shield(
    "Haskell",
    "Haskell",
    "#5e5086",
    "haskell",
    "white",
    "https://www.haskell.org/",
);

pub const HTML5: BadgeUnion = shield(
    "HTML5",
    "HTML5",
    "#E34F26",
    "html5",
    "white",
    "https://www.w3.org/Style/CSS/",
);

pub const INFLUXDB: BadgeUnion = shield(
    "InfluxDB",
    "InfluxDB",
    "#22ADF6",
    "InfluxDB",
    "white",
    "https://www.influxdata.com/",
);

pub const IONIC: BadgeUnion = shield(
    "Ionic",
    "Ionic",
    "#3880FF",
    "ionic",
    "white",
    "https://ionicframework.com/",
);

pub const JASMINE: BadgeUnion = shield(
    "Jasmine",
    "Jasmine",
    "#8A4182",
    "jasmine",
    "white",
    "https://jasmine.github.io/",
);

pub const JAVA: BadgeUnion = shield(
    "Java",
    "Java",
    "#ED8B00",
    "openjdk",
    "white",
    "https://www.java.com/",
);

pub const JAVAFX: BadgeUnion = shield(
    "JavaFX",
    "JavaFX",
    "#FF0000",
    "javafx",
    "white",
    "https://openjfx.io/",
);

pub const JAVASCRIPT: BadgeUnion = shield(
    "JavaScript",
    "JavaScript",
    "#323330",
    "javascript",
    "#F7DF1E",
    "https://developer.mozilla.org/en-US/docs/Web/JavaScript",
);

pub const JINJA: BadgeUnion = shield(
    "Jinja",
    "Jinja",
    "white",
    "jinja",
    "black",
    "https://jinja.palletsprojects.com/",
);

pub const JOOMLA: BadgeUnion = shield(
    "Joomla",
    "Joomla",
    "#5091CD",
    "joomla",
    "white",
    "https://www.joomla.org/",
);

pub const JQUERY: BadgeUnion = shield(
    "jQuery",
    "jQuery",
    "#0769AD",
    "jquery",
    "white",
    "https://jquery.com/",
);

pub const JULIA: BadgeUnion = shield(
    "Julia",
    "Julia",
    "#9558B2",
    "julia",
    "white",
    "https://julialang.org/",
);

pub const JUPYTER_NOTEBOOK: BadgeUnion = shield(
    "Jupyter Notebook",
    "jupyter",
    "#FA0F00",
    "jupyter",
    "white",
    "https://jupyter.org/",
);

pub const JWT: BadgeUnion = shield(
    "JWT",
    "JWT",
    "black",
    "JSON web tokens",
    "white",
    "https://jwt.io/",
);

pub const KOTLIN: BadgeUnion = shield(
    "Kotlin",
    "Kotlin",
    "#7F52FF",
    "kotlin",
    "white",
    "https://kotlinlang.org/",
);

pub const LARAVEL: BadgeUnion = shield(
    "Laravel",
    "Laravel",
    "#FF2D20",
    "laravel",
    "white",
    "https://laravel.com/",
);

pub const LATEX: BadgeUnion = shield(
    "LaTeX",
    "LaTeX",
    "#008080",
    "latex",
    "white",
    "https://www.latex-project.org/",
);

pub const LESS: BadgeUnion = shield(
    "Less",
    "Less",
    "#2B4C80",
    "less",
    "white",
    "https://lesscss.org/",
);

pub const LIVEWIRE: BadgeUnion = shield(
    "Livewire",
    "Livewire",
    "#4E56A6",
    "livewire",
    "white",
    "https://www.livewire.io/",
);

pub const LUA: BadgeUnion = shield("Lua", "Lua", "#2C2D72", "lua", "white", "https://www.lua.org/");

pub const MANTINE: BadgeUnion = shield(
    "Mantine",
    "Mantine",
    "ffffff",
    "mantine",
    "#339AF0",
    "https://mantine.dev/",
);

pub const MARKDOWN: BadgeUnion = shield(
    "Markdown",
    "Markdown",
    "#000000",
    "markdown",
    "white",
    "https://www.markdownguide.org/",
);

pub const MAXCOMPUTE: BadgeUnion = shield(
    "MaxCompute",
    "MaxCompute",
    "#FF6701",
    "alibabacloud",
    "white",
    "https://www.alibabacloud.com/product/maxcompute",
);

pub const METEOR: BadgeUnion = shield(
    "Meteor JS",
    "Meteor JS",
    "#D74C4C",
    "meteor",
    "white",
    "https://www.meteor.com/",
);

pub const MONGODB: BadgeUnion = shield(
    "MongoDB",
    "MongoDB",
    "#4ea94b",
    "mongodb",
    "white",
    "https://www.mongodb.com/",
);

pub const MSSQL: BadgeUnion = shield(
    "MicrosoftSQLServer",
    "Microsoft SQL Server",
    "#CC2927",
    "microsoft sql server",
    "white",
    "https://www.microsoft.com/en-us/sql-server",
);

pub const MUI: BadgeUnion = shield("MUI", "MUI", "#0081CB", "mui", "white", "https://mui.com/");

pub const MYSQL: BadgeUnion = shield(
    "MySQL",
    "MySQL",
    "#4479A1",
    "mysql",
    "white",
    "https://www.mysql.com/",
);

pub const NEO4J: BadgeUnion = shield(
    "Neo4J",
    "Neo4j",
    "#008CC1",
    "neo4j",
    "white",
    "https://neo4j.com/",
);

pub const NIM: BadgeUnion = shield(
    "Nim",
    "Nim",
    "#FFE953",
    "nim",
    "white",
    "https://nim-lang.org/",
);

pub const NIX: BadgeUnion = shield("Nix", "Nix", "#5277C3", "nixos", "white", "https://nixos.org/");

pub const NODEJS: BadgeUnion = shield(
    "Node.js",
    "NodeJS",
    "#6DA55F",
    "node.js",
    "white",
    "https://nodejs.org/",
);

pub const NPM: BadgeUnion = BadgeUnion::shield(
    ShieldBadge::new(
        "NPM",
        "NPM",
        "#CB3837",
        "npm",
        "white",
        "https://www.npmjs.com/",
    )
)
.with_badgen(BadgenBadge::new(
    "NPM",
    "npm",
    "red",
    "npm",
    "https://www.npmjs.com/",
));

pub const NUXT: BadgeUnion = shield(
    "Nuxt JS",
    "Nuxt JS",
    "#002E3B",
    "nuxtdotjs",
    "#00DC82",
    "https://nuxtjs.org/",
);

pub const NX: BadgeUnion = shield("Nx", "Nx", "#143055", "nx", "white", "https://nx.dev/");

pub const OBJECTIVE_C: BadgeUnion = shield(
    "ObjectiveC",
    "Objective-C",
    "#3A95E3",
    "apple",
    "white",
    "https://developer.apple.com/documentation/objectivec",
);

pub const OCAML: BadgeUnion = shield(
    "OCaml",
    "OCaml",
    "#E98407",
    "ocaml",
    "white",
    "https://ocaml.org/",
);

pub const OPENCV: BadgeUnion = shield(
    "OpenCV",
    "OpenCV",
    "white",
    "opencv",
    "white",
    "https://opencv.org/",
);

pub const OPENGL: BadgeUnion = shield(
    "OpenGL",
    "OpenGL",
    "white",
    "opengl",
    "white",
    "https://www.opengl.org/",
);

pub const ORG_MODE: BadgeUnion = shield(
    "OrgMode",
    "Org Mode",
    "#77AA99",
    "org",
    "white",
    "https://orgmode.org/",
);

pub const P5JS: BadgeUnion = shield(
    "P5js",
    "P5js",
    "#ED225D",
    "p5.js",
    "FFFFFF",
    "https://p5js.org/",
);

pub const PERL: BadgeUnion = shield(
    "Perl",
    "Perl",
    "#39457E",
    "perl",
    "white",
    "https://www.perl.org/",
);

pub const PHP: BadgeUnion = shield("PHP", "PHP", "#777BB4", "php", "white", "https://www.php.net/");

pub const PLANETSCALE: BadgeUnion = shield(
    "PlanetScale",
    "PlanetScale",
    "#000000",
    "planetscale",
    "white",
    "https://planetscale.com/",
);

pub const PNPM: BadgeUnion = shield(
    "PNPM",
    "PNPM",
    "#4A4A4A",
    "pnpm",
    "#F69220",
    "https://pnpm.io/",
);

pub const POCKETBASE: BadgeUnion = shield(
    "PocketBase",
    "PocketBase",
    "#b8dbe4",
    "Pocketbase",
    "black",
    "https://pocketbase.io/",
);

pub const POETRY: BadgeUnion = shield(
    "Poetry",
    "Poetry",
    "#3B82F6",
    "poetry",
    "#0B3D8D",
    "https://python-poetry.org/",
);

pub const POSTGRES: BadgeUnion = shield(
    "Postgres",
    "Postgres",
    "#316192",
    "postgresql",
    "white",
    "https://www.postgresql.org/",
);

pub const POWERSHELL: BadgeUnion = shield(
    "PowerShell",
    "PowerShell",
    "#5391FE",
    "powershell",
    "white",
    "https://learn.microsoft.com/en-us/powershell/",
);

pub const PREFECT: BadgeUnion = shield(
    "Prefect",
    "Prefect",
    "white",
    "prefect",
    "white",
    "https://www.prefect.io/",
);

pub const PROMETHEUS: BadgeUnion = shield(
    "Prometheus",
    "Prometheus",
    "#E6522C",
    "prometheus",
    "white",
    "https://prometheus.io/",
);

pub const PUG: BadgeUnion = shield("Pug", "Pug", "FFF", "pug", "#A86454", "https://pugjs.org/");

pub const PYTEST: BadgeUnion = shield(
    "Pytest",
    "Pytest",
    "white",
    "pytest",
    "#2F9FE3",
    "https://pytest.org/",
);

pub const PYTHON: BadgeUnion = shield(
    "Python",
    "Python",
    "#3670A0",
    "python",
    "#ffdd54",
    "https://www.python.org/",
);

pub const QT: BadgeUnion = shield("Qt", "Qt", "#217346", "Qt", "white", "https://www.qt.io/");

pub const QUARKUS: BadgeUnion = shield(
    "Quarkus",
    "Quarkus",
    "#4794EB",
    "quarkus",
    "white",
    "https://quarkus.io/",
);

pub const QUASAR: BadgeUnion = shield(
    "Quasar",
    "Quasar",
    "#16B7FB",
    "quasar",
    "black",
    "https://quasar.dev/",
);

pub const R: BadgeUnion = shield("R", "R", "#276DC3", "r", "white", "https://www.r-project.org/");

pub const RABBIT_MQ: BadgeUnion = shield(
    "RabbitMQ",
    "RabbitMQ",
    "#FF6600",
    "rabbitmq",
    "white",
    "https://www.rabbitmq.com/",
);

pub const RADIX_UI: BadgeUnion = shield(
    "Radix UI",
    "Radix UI",
    "#161618",
    "radix-ui",
    "white",
    "https://www.radix-ui.com/",
);

pub const REACT: BadgeUnion = shield(
    "React",
    "React",
    "#20232A",
    "react",
    "#61DAFB",
    "https://reactjs.org/",
);

pub const REACT_HOOK_FORM: BadgeUnion = shield(
    "React Hook Form",
    "React Hook Form",
    "#EC5990",
    "reacthookform",
    "white",
    "https://react-hook-form.com/",
);

pub const REACT_NATIVE: BadgeUnion = shield(
    "React Native",
    "React Native",
    "#20232A",
    "react",
    "#61DAFB",
    "https://reactnative.dev/",
);

pub const REACT_QUERY: BadgeUnion = shield(
    "React Query",
    "React Query",
    "#FF4154",
    "react-query",
    "white",
    "https://react-query.tanstack.com/",
);

pub const REACT_ROUTER: BadgeUnion = shield(
    "React Router",
    "React Router",
    "#CA4245",
    "react-router",
    "white",
    "https://reactrouter.com/",
);

pub const REDIS: BadgeUnion = shield(
    "Redis",
    "redis",
    "#DD0031",
    "redis",
    "white",
    "https://redis.io/",
);

pub const REDUX: BadgeUnion = shield(
    "Redux",
    "Redux",
    "#593D88",
    "redux",
    "white",
    "https://redux.js.org/",
);

pub const REMIX: BadgeUnion = shield(
    "Remix",
    "Remix",
    "black",
    "remix",
    "white",
    "https://remix.run/",
);

pub const RESCRIPT: BadgeUnion = shield(
    "ReScript",
    "ReScript",
    "#14162c",
    "rescript",
    "#e34c4c",
    "https://rescript-lang.org/",
);

pub const ROLLUP: BadgeUnion = shield(
    "RollupJS",
    "RollupJS",
    "#EF3335",
    "rollup.js",
    "white",
    "https://rollupjs.org/",
);

pub const RUBY: BadgeUnion = shield(
    "Ruby",
    "Ruby",
    "#CC342D",
    "ruby",
    "white",
    "https://www.ruby-lang.org/",
);

pub const RUST: BadgeUnion = shield(
    "Rust",
    "Rust",
    "#000000",
    "rust",
    "white",
    "https://www.rust-lang.org/",
);

pub const RXDB: BadgeUnion = shield(
    "RxDB",
    "RxDB",
    "#B7178C",
    "reactivex",
    "white",
    "https://rxdb.info/",
);

pub const RXJS: BadgeUnion = shield(
    "RxJS",
    "RxJS",
    "#B7178C",
    "reactivex",
    "white",
    "https://rxjs.dev/",
);

pub const SASS: BadgeUnion = shield(
    "SASS",
    "SASS",
    "hotpink",
    "SASS",
    "white",
    "https://sass-lang.com/",
);

pub const SCALA: BadgeUnion = shield(
    "Scala",
    "Scala",
    "#DC322F",
    "scala",
    "white",
    "https://www.scala-lang.org/",
);

pub const SCRAPY: BadgeUnion = shield(
    "Scrapy",
    "Scrapy",
    "#60A839",
    "scrapy",
    "#D1D2D3",
    "https://scrapy.org/",
);

pub const SEMANTIC_UI_REACT: BadgeUnion = shield(
    "Semantic UI React",
    "Semantic UI React",
    "#35BDB2",
    "semantic-ui-react",
    "white",
    "https://react.semantic-ui.com/",
);

pub const SNOWFLAKE: BadgeUnion = shield(
    "Snowflake",
    "Snowflake",
    "#29B5E8",
    "snowflake",
    "white",
    "https://www.snowflake.com/",
);

pub const SOCKET_IO: BadgeUnion = shield(
    "Socket.io",
    "Socket.io",
    "black",
    "socket.io",
    "white",
    "https://socket.io/",
);

pub const SOLIDITY: BadgeUnion = shield(
    "Solidity",
    "Solidity",
    "#363636",
    "solidity",
    "white",
    "https://soliditylang.org/",
);

pub const SPRING: BadgeUnion = shield(
    "Spring",
    "Spring",
    "#6DB33F",
    "spring",
    "white",
    "https://spring.io/",
);

pub const SQLITE: BadgeUnion = shield(
    "SQLite",
    "SQLite",
    "#07405E",
    "sqlite",
    "white",
    "https://www.sqlite.org/",
);

pub const STREAMLIT: BadgeUnion = shield(
    "Streamlit",
    "Streamlit",
    "#FE4B4B",
    "streamlit",
    "white",
    "https://streamlit.io/",
);

pub const STYLED_COMPONENTS: BadgeUnion = shield(
    "Styled Components",
    "Styled Components",
    "#DB7093",
    "styled-components",
    "white",
    "https://styled-components.com/",
);

pub const STYLUS: BadgeUnion = shield(
    "Stylus",
    "Stylus",
    "#ff6347",
    "stylus",
    "white",
    "https://stylus-lang.com/",
);

pub const SUPABASE: BadgeUnion = shield(
    "Supabase",
    "Supabase",
    "#3ECF8E",
    "supabase",
    "white",
    "https://supabase.io/",
);

pub const SVELTE: BadgeUnion = shield(
    "Svelte",
    "Svelte",
    "#f1413d",
    "svelte",
    "white",
    "https://svelte.dev/",
);

pub const SVELTEKIT: BadgeUnion = shield(
    "SvelteKit",
    "SvelteKit",
    "#f1413d",
    "svelte",
    "white",
    "https://kit.svelte.dev/",
);

pub const SWAGGER: BadgeUnion = shield(
    "Swagger",
    "",
    "#Clojure",
    "swagger",
    "white",
    "https://swagger.io/",
);

pub const SWIFT: BadgeUnion = shield(
    "Swift",
    "Swift",
    "#F54A2A",
    "swift",
    "white",
    "https://swift.org/",
);

pub const SYMFONY: BadgeUnion = shield(
    "Symfony",
    "Symfony",
    "#000000",
    "symfony",
    "white",
    "https://symfony.com/",
);

pub const TAILWINDCSS: BadgeUnion = shield(
    "TailwindCSS",
    "TailwindCSS",
    "#38B2AC",
    "tailwind-css",
    "white",
    "https://tailwindcss.com/",
);

pub const TAURI: BadgeUnion = shield(
    "Tauri",
    "Tauri",
    "#24C8DB",
    "tauri",
    "#FFFFFF",
    "https://tauri.app/",
);

pub const THREE_JS: BadgeUnion = shield(
    "Three.js",
    "Three.js",
    "black",
    "three.js",
    "white",
    "https://threejs.org/",
);

pub const TRPC: BadgeUnion = shield("tRPC", "tRPC", "#2596BE", "tRPC", "white", "https://trpc.io/");

pub const TYPESCRIPT: BadgeUnion = BadgeUnion::shield(
    ShieldBadge::new(
        "TypeScript",
        "TypeScript",
        "#007ACC",
        "typescript",
        "white",
        "https://www.typescriptlang.org/",
    )
)
.with_badgen(BadgenBadge::new(
    "TypeScript",
    "typescript",
    "blue",
    "typescript",
    "https://www.typescriptlang.org/",
));

pub const TYPE_GRAPHQL: BadgeUnion = shield(
    "TypeGraphQL",
    "TypeGraphQL",
    "#C04392",
    "type-graphql",
    "white",
    "https://typegraphql.ml/",
);

pub const UNOCSS: BadgeUnion = shield(
    "UnoCSS",
    "UnoCSS",
    "#333333",
    "unocss",
    "white",
    "https://unocss.dev/",
);

pub const VITE: BadgeUnion = shield(
    "Vite",
    "Vite",
    "#646CFF",
    "vite",
    "white",
    "https://vitejs.dev/",
);

pub const VSCODE: BadgeUnion = BadgeUnion::shield(
    ShieldBadge::new(
        "Visual Studio Code",
        "Visual Studio Code",
        "#0078d7",
        "visual-studio-code",
        "white",
        "https://code.visualstudio.com/",
    )
)
.with_badgen(BadgenBadge::new(
    "Visual Studio Code",
    "vscode",
    "blue",
    "visualstudio",
    "https://code.visualstudio.com/",
));

pub const VUE: BadgeUnion = shield(
    "Vue.js",
    "Vue.js",
    "#35495e",
    "vuedotjs",
    "#4FC08D",
    "https://vuejs.org/",
);

pub const VUETIFY: BadgeUnion = shield(
    "Vuetify",
    "Vuetify",
    "#1867C0",
    "vuetify",
    "AEDDFF",
    "https://vuetifyjs.com/",
);

pub const WEB3_JS: BadgeUnion = shield(
    "Web3.js",
    "Web3.js",
    "#F16822",
    "web3.js",
    "white",
    "https://web3js.org/",
);

pub const WEBPACK: BadgeUnion = shield(
    "Webpack",
    "Webpack",
    "#8DD6F9",
    "webpack",
    "black",
    "https://webpack.js.org/",
);

pub const WINDICSS: BadgeUnion = shield(
    "WindiCSS",
    "WindiCSS",
    "#48B0F1",
    "windi-css",
    "white",
    "https://windicss.org/",
);

pub const XAMARIN: BadgeUnion = shield(
    "Xamarin",
    "Xamarin",
    "#3199DC",
    "xamarin",
    "white",
    "https://dotnet.microsoft.com/apps/xamarin",
);

pub const YAML: BadgeUnion = shield(
    "YAML",
    "YAML",
    "#ffffff",
    "yaml",
    "#151515",
    "https://yaml.org/",
);

pub const YARN: BadgeUnion = shield(
    "Yarn",
    "Yarn",
    "#2C8EBB",
    "yarn",
    "white",
    "https://yarnpkg.com/",
);

pub const ZIG: BadgeUnion = shield("Zig", "Zig", "#F7A41D", "zig", "white", "https://ziglang.org/");

pub const ZOD: BadgeUnion = shield("Zod", "Zod", "#3068b7", "zod", "white", "https://zod.dev/");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::{BadgeKind, Render};

    #[test]
    fn test_spark_keeps_flat_square_style() {
        let spark = APACHE_SPARK.shield.unwrap();
        assert_eq!(spark.style, ShieldStyle::FlatSquare);
        assert!(spark.url(None).ends_with("style=flat-square"));
    }

    #[test]
    fn test_default_style_is_for_the_badge() {
        assert_eq!(GO.shield.unwrap().style, ShieldStyle::ForTheBadge);
    }

    #[test]
    fn test_badgen_variants() {
        for entry in [DOCKER, TYPESCRIPT, NPM, BASH, VSCODE] {
            let shield = entry.select(BadgeKind::Shield).unwrap();
            let badgen = entry.select(BadgeKind::Badgen).unwrap();
            assert_eq!(shield.id(), badgen.id());
        }
    }
}
