use crate::candidates::CandidateEntry;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;

pub(crate) const STAR_WARS_SDL: &str = concat!(
    "\"\"\"One of the films in the Star Wars Trilogy\"\"\"\n",
    "enum Episode {\n",
    "  \"\"\"Released in 1977.\"\"\"\n",
    "  NEWHOPE\n",
    "  \"\"\"Released in 1980.\"\"\"\n",
    "  EMPIRE\n",
    "  \"\"\"Released in 1983.\"\"\"\n",
    "  JEDI\n",
    "}\n",
    "\n",
    "\"\"\"A character in the Star Wars Trilogy\"\"\"\n",
    "interface Character {\n",
    "  \"\"\"The id of the character.\"\"\"\n",
    "  id: String!\n",
    "  \"\"\"The name of the character.\"\"\"\n",
    "  name: String\n",
    "  \"\"\"The friends of the character, or an empty list if they have none.\"\"\"\n",
    "  friends: [Character]\n",
    "  \"\"\"Which movies they appear in.\"\"\"\n",
    "  appearsIn: [Episode]\n",
    "}\n",
    "\n",
    "\"\"\"A humanoid creature in the Star Wars universe.\"\"\"\n",
    "type Human implements Character {\n",
    "  id: String!\n",
    "  name: String\n",
    "  friends: [Character]\n",
    "  appearsIn: [Episode]\n",
    "  \"\"\"The home planet of the human, or null if unknown.\"\"\"\n",
    "  homePlanet: String\n",
    "  \"\"\"Height in meters.\"\"\"\n",
    "  height(unit: LengthUnit = METER): Float\n",
    "}\n",
    "\n",
    "\"\"\"A mechanical creature in the Star Wars universe.\"\"\"\n",
    "type Droid implements Character {\n",
    "  id: String!\n",
    "  name: String\n",
    "  friends: [Character]\n",
    "  appearsIn: [Episode]\n",
    "  \"\"\"The primary function of the droid.\"\"\"\n",
    "  primaryFunction: String\n",
    "  serialNumber: String @deprecated(reason: \"Use `id`.\")\n",
    "}\n",
    "\n",
    "type Starship {\n",
    "  id: ID!\n",
    "  name: String!\n",
    "}\n",
    "\n",
    "union SearchResult = Human | Droid | Starship\n",
    "\n",
    "enum LengthUnit {\n",
    "  METER\n",
    "  FOOT\n",
    "  CUBIT @deprecated\n",
    "}\n",
    "\n",
    "\"\"\"The input object sent when someone is creating a new review\"\"\"\n",
    "input ReviewInput {\n",
    "  \"\"\"0-5 stars\"\"\"\n",
    "  stars: Int!\n",
    "  \"\"\"Comment about the movie, optional\"\"\"\n",
    "  commentary: String\n",
    "  episode: Episode\n",
    "}\n",
    "\n",
    "type Review {\n",
    "  stars: Int!\n",
    "  commentary: String\n",
    "}\n",
    "\n",
    "type Query {\n",
    "  \"\"\"The hero of a given episode.\"\"\"\n",
    "  hero(\n",
    "    \"\"\"If omitted, returns the hero of the whole saga.\"\"\"\n",
    "    episode: Episode\n",
    "  ): Character\n",
    "  human(id: String!): Human\n",
    "  droid(id: String!): Droid\n",
    "  search(text: String, first: Int = 10): [SearchResult!]!\n",
    "}\n",
    "\n",
    "type Mutation {\n",
    "  createReview(episode: Episode!, review: ReviewInput!): Review\n",
    "}\n",
    "\n",
    "\"\"\"Marks a field as only resolvable by authenticated callers.\"\"\"\n",
    "directive @auth(role: String = \"USER\") on FIELD | QUERY\n",
);

pub(crate) fn star_wars_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(None, STAR_WARS_SDL)
        .expect("fixture parses")
        .build()
        .expect("fixture builds")
}

pub(crate) fn texts(entries: &[CandidateEntry]) -> Vec<&str> {
    entries.iter().map(|entry| entry.text()).collect()
}
