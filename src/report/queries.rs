//! The fixed SPARQL query battery.
//!
//! Queries A–D, F and G run against the local graph. Query E targets the
//! public Wikidata endpoint and is only ever emitted as text.

use super::NamedQuery;

/// Item used by the point-lookup and recommendation queries by default.
pub const DEFAULT_SEED_ITEM: &str = "ex:prod001";

const PREFIXES: &str = "PREFIX ex: <http://example.org/webshop#>
PREFIX schema: <http://schema.org/>
PREFIX xsd: <http://www.w3.org/2001/XMLSchema#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>";

/// The locally executed battery, in report order.
///
/// `seed_item` is substituted into queries A and F; it may be a prefixed
/// name (`ex:prod001`) or an IRI in angle brackets.
pub fn fixed_battery(seed_item: &str) -> Vec<NamedQuery> {
    let item_lookup = format!(
        "{PREFIXES}
# A) For a given item, provide all its categories/subcategories and its brand.
SELECT ?itemLabel ?brandName ?categoryLabel WHERE {{
  VALUES ?item {{ {seed_item} }}
  ?item rdfs:label ?itemLabel ;
        ex:hasBrand ?brand ;
        ex:inCategory ?category .
  ?brand rdfs:label ?brandName .
  ?category rdfs:label ?categoryLabel .
}}
"
    );
    let cross_category_pairs = format!(
        "{PREFIXES}
# B) Items from different subcategories that share the same brand.
SELECT ?brandName ?item1Label ?category1Label ?item2Label ?category2Label WHERE {{
  ?item1 ex:hasBrand ?brand ;
         ex:inCategory ?category1 ;
         rdfs:label ?item1Label .
  ?item2 ex:hasBrand ?brand ;
         ex:inCategory ?category2 ;
         rdfs:label ?item2Label .
  ?brand rdfs:label ?brandName .
  ?category1 rdfs:label ?category1Label .
  ?category2 rdfs:label ?category2Label .
  FILTER(?item1 != ?item2 && ?category1 != ?category2)
  FILTER(STR(?item1) < STR(?item2))   # avoid symmetric duplicates
}}
ORDER BY ?brandName ?item1Label ?item2Label
LIMIT 10
"
    );
    let brand_averages = format!(
        "{PREFIXES}
# C) Group products by brand and show average price and rating
SELECT ?brandName
       (AVG(xsd:decimal(?price)) AS ?avgPrice)
       (AVG(xsd:decimal(?rating)) AS ?avgRating)
       (COUNT(?item) AS ?itemCount) WHERE {{
  ?item ex:hasBrand ?brand ;
        schema:price ?price ;
        schema:ratingValue ?rating .
  ?brand rdfs:label ?brandName .
}}
GROUP BY ?brandName
ORDER BY DESC(?avgPrice)
"
    );
    let mice_by_brand = format!(
        "{PREFIXES}
# D) Sort products in mice category by average brand price
SELECT ?brandName
       (AVG(xsd:decimal(?price)) AS ?avgBrandPrice)
       (AVG(xsd:decimal(?rating)) AS ?avgBrandRating)
       (COUNT(?item) AS ?itemsInCategory) WHERE {{
  ?item a ex:Product ;
        ex:inCategory ex:ComputerMice ;
        ex:hasBrand ?brand ;
        schema:price ?price ;
        schema:ratingValue ?rating .
  ?brand rdfs:label ?brandName .
}}
GROUP BY ?brandName
ORDER BY DESC(?avgBrandPrice)
"
    );
    let recommendations = format!(
        "{PREFIXES}
# F) Recommend items sharing brand (always true here) and optionally same category
SELECT ?candidateLabel
       (IF(?candidateCategory = ?seedCategory, \"SameCategory\", \"DifferentCategory\") AS ?categoryRelation)
WHERE {{
  VALUES ?seedItem {{ {seed_item} }}
  ?seedItem ex:hasBrand ?seedBrand ; ex:inCategory ?seedCategory .

  ?candidate rdfs:label ?candidateLabel ;
             ex:hasBrand ?seedBrand ;
             ex:inCategory ?candidateCategory .
  FILTER(?candidate != ?seedItem)
}}
ORDER BY ?categoryRelation ?candidateLabel
LIMIT 10
"
    );
    let cheap_well_rated_mice = format!(
        "{PREFIXES}
# G) Custom question: \"Find mice products under $100 with rating above 4.0\"
SELECT ?itemLabel ?price ?rating ?color WHERE {{
  ?item a ex:Product ;
        ex:inCategory ex:ComputerMice ;
        schema:price ?price ;
        schema:ratingValue ?rating ;
        schema:color ?color ;
        rdfs:label ?itemLabel .

  FILTER(xsd:decimal(?price) < 100.0 && xsd:decimal(?rating) > 4.0)
}}
ORDER BY ASC(xsd:decimal(?price))
"
    );

    vec![
        NamedQuery::new("A", item_lookup),
        NamedQuery::new("B", cross_category_pairs),
        NamedQuery::new("C", brand_averages),
        NamedQuery::new("D", mice_by_brand),
        NamedQuery::new("F", recommendations),
        NamedQuery::new("G", cheap_well_rated_mice),
    ]
}

/// Query E: brand facts from Wikidata via its public endpoint.
///
/// Emitted into the report for manual use at <https://query.wikidata.org/>;
/// this crate never sends it anywhere.
pub fn federated_query(brand_label: &str) -> NamedQuery {
    let text = format!(
        "
# E) External SERVICE (Wikidata)
# Copy this query to https://query.wikidata.org/ and run it

PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

SELECT ?property ?propertyLabel ?value ?valueLabel WHERE {{
  BIND(\"{brand_label}\"@en AS ?brandLabel)
  ?brand wdt:P31/wdt:P279* wd:Q4830453 ;
         rdfs:label ?brandLabel .

  VALUES ?prop {{
    wdt:P159   # headquarters location
    wdt:P571   # inception date
    wdt:P112   # founder
    wdt:P154   # logo image
    wdt:P856   # official website
  }}

  ?brand ?prop ?value .
  ?prop rdfs:label ?property .

  OPTIONAL {{ ?value rdfs:label ?valueLabel }}

  FILTER(LANG(?brandLabel) = \"en\")
  FILTER(LANG(?property) = \"en\")
  FILTER(!BOUND(?valueLabel) || LANG(?valueLabel) = \"en\")
}}
ORDER BY ?property
"
    );
    NamedQuery {
        id: "E".into(),
        title: "Query E (for Wikidata)".into(),
        text,
    }
}
