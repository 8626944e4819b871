//! British and Canadian spellings, Americanized.

use crate::RuleEntry;
use crate::rules::phrases;

pub(crate) fn entries() -> Vec<RuleEntry> {
    phrases(BRITISH)
}

const BRITISH: &[(&str, &str)] = &[
    // -our
    ("armour", "armor"),
    ("armoured", "armored"),
    ("behaviour", "behavior"),
    ("behaviours", "behaviors"),
    ("colour", "color"),
    ("coloured", "colored"),
    ("colours", "colors"),
    ("favour", "favor"),
    ("favours", "favors"),
    ("favourite", "favorite"),
    ("favourites", "favorites"),
    ("flavour", "flavor"),
    ("flavours", "flavors"),
    ("harbour", "harbor"),
    ("honour", "honor"),
    ("humour", "humor"),
    ("labour", "labor"),
    ("neighbour", "neighbor"),
    ("neighbours", "neighbors"),
    ("odour", "odor"),
    ("rumour", "rumor"),
    ("savour", "savor"),
    ("vapour", "vapor"),
    // -re
    ("centre", "center"),
    ("centres", "centers"),
    ("fibre", "fiber"),
    ("litre", "liter"),
    ("litres", "liters"),
    ("metre", "meter"),
    ("metres", "meters"),
    ("theatre", "theater"),
    // -ise / -yse
    ("analyse", "analyze"),
    ("apologise", "apologize"),
    ("organise", "organize"),
    ("organised", "organized"),
    ("realise", "realize"),
    ("realised", "realized"),
    ("recognise", "recognize"),
    ("recognised", "recognized"),
    // -ll-
    ("cancelled", "canceled"),
    ("jewellery", "jewelry"),
    ("travelled", "traveled"),
    ("traveller", "traveler"),
    ("travelling", "traveling"),
    // -ce
    ("defence", "defense"),
    ("licence", "license"),
    ("offence", "offense"),
    // misc
    ("aeroplane", "airplane"),
    ("aluminium", "aluminum"),
    ("axe", "ax"),
    ("catalogue", "catalog"),
    ("cheque", "check"),
    ("dialogue", "dialog"),
    ("grey", "gray"),
    ("mould", "mold"),
    ("moustache", "mustache"),
    ("plough", "plow"),
    ("programme", "program"),
    ("pyjamas", "pajamas"),
    ("sceptical", "skeptical"),
    ("tyre", "tire"),
    ("tyres", "tires"),
];
