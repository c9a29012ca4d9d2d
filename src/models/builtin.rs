//! Built-in German to English vocabulary.

pub const GERMAN_TO_ENGLISH: &[(&str, &str)] = &[
    // greetings and courtesy
    ("Hallo", "Hello"),
    ("Guten Morgen", "Good morning"),
    ("Guten Tag", "Good day"),
    ("Guten Abend", "Good evening"),
    ("Gute Nacht", "Good night"),
    ("Wie geht es Ihnen?", "How are you? (formal)"),
    ("Wie geht's?", "How are you? (informal)"),
    ("Ich bin gut", "I am well"),
    ("Danke", "Thank you"),
    ("Vielen Dank", "Thank you very much"),
    ("Bitte", "Please / You're welcome"),
    ("Entschuldigung", "Excuse me / Sorry"),
    ("Tschüss", "Bye"),
    ("Auf Wiedersehen", "Goodbye"),
    ("Bis später", "See you later"),
    ("Willkommen", "Welcome"),
    ("Ja", "Yes"),
    ("Nein", "No"),
    ("Vielleicht", "Maybe"),
    ("Ich verstehe nicht", "I don't understand"),
    ("Sprechen Sie Englisch?", "Do you speak English?"),
    ("Wie heißen Sie?", "What is your name? (formal)"),
    ("Ich heiße", "My name is"),
    ("Freut mich", "Nice to meet you"),
    // people and family
    ("die Familie", "the family"),
    ("die Mutter", "the mother"),
    ("der Vater", "the father"),
    ("der Bruder", "the brother"),
    ("die Schwester", "the sister"),
    ("das Kind", "the child"),
    ("der Freund", "the friend (male)"),
    ("die Freundin", "the friend (female)"),
    ("der Mann", "the man"),
    ("die Frau", "the woman"),
    // numbers
    ("eins", "one"),
    ("zwei", "two"),
    ("drei", "three"),
    ("vier", "four"),
    ("fünf", "five"),
    ("sechs", "six"),
    ("sieben", "seven"),
    ("acht", "eight"),
    ("neun", "nine"),
    ("zehn", "ten"),
    ("hundert", "hundred"),
    ("tausend", "thousand"),
    // time
    ("heute", "today"),
    ("morgen", "tomorrow"),
    ("gestern", "yesterday"),
    ("die Woche", "the week"),
    ("der Monat", "the month"),
    ("das Jahr", "the year"),
    ("die Stunde", "the hour"),
    ("die Minute", "the minute"),
    ("jetzt", "now"),
    ("immer", "always"),
    ("nie", "never"),
    ("Montag", "Monday"),
    ("Dienstag", "Tuesday"),
    ("Mittwoch", "Wednesday"),
    ("Donnerstag", "Thursday"),
    ("Freitag", "Friday"),
    ("Samstag", "Saturday"),
    ("Sonntag", "Sunday"),
    // food and drink
    ("das Wasser", "the water"),
    ("das Brot", "the bread"),
    ("der Kaffee", "the coffee"),
    ("der Tee", "the tea"),
    ("die Milch", "the milk"),
    ("der Apfel", "the apple"),
    ("der Käse", "the cheese"),
    ("das Bier", "the beer"),
    ("der Wein", "the wine"),
    ("das Frühstück", "the breakfast"),
    ("das Mittagessen", "the lunch"),
    ("das Abendessen", "the dinner"),
    ("Die Rechnung, bitte", "The bill, please"),
    ("Ich habe Hunger", "I am hungry"),
    ("Ich habe Durst", "I am thirsty"),
    // places and travel
    ("das Haus", "the house"),
    ("die Wohnung", "the apartment"),
    ("die Stadt", "the city"),
    ("die Straße", "the street"),
    ("der Bahnhof", "the train station"),
    ("der Flughafen", "the airport"),
    ("das Hotel", "the hotel"),
    ("die Schule", "the school"),
    ("die Arbeit", "the work"),
    ("das Geschäft", "the shop"),
    ("die Apotheke", "the pharmacy"),
    ("das Krankenhaus", "the hospital"),
    ("der Zug", "the train"),
    ("das Auto", "the car"),
    ("das Fahrrad", "the bicycle"),
    ("Wo ist die Toilette?", "Where is the toilet?"),
    ("Wie viel kostet das?", "How much does that cost?"),
    ("links", "left"),
    ("rechts", "right"),
    ("geradeaus", "straight ahead"),
    // verbs
    ("sein", "to be"),
    ("haben", "to have"),
    ("gehen", "to go"),
    ("kommen", "to come"),
    ("machen", "to do / to make"),
    ("sagen", "to say"),
    ("sehen", "to see"),
    ("essen", "to eat"),
    ("trinken", "to drink"),
    ("schlafen", "to sleep"),
    ("lesen", "to read"),
    ("schreiben", "to write"),
    ("sprechen", "to speak"),
    ("lernen", "to learn"),
    ("arbeiten", "to work"),
    ("kaufen", "to buy"),
    ("wohnen", "to live (reside)"),
    ("fahren", "to drive / to ride"),
    ("spielen", "to play"),
    ("verstehen", "to understand"),
    // adjectives
    ("gut", "good"),
    ("schlecht", "bad"),
    ("groß", "big / tall"),
    ("klein", "small"),
    ("neu", "new"),
    ("alt", "old"),
    ("schön", "beautiful"),
    ("schnell", "fast"),
    ("langsam", "slow"),
    ("warm", "warm"),
    ("kalt", "cold"),
    ("teuer", "expensive"),
    ("billig", "cheap"),
    ("müde", "tired"),
    ("glücklich", "happy"),
    // things and weather
    ("das Buch", "the book"),
    ("der Tisch", "the table"),
    ("der Stuhl", "the chair"),
    ("die Tür", "the door"),
    ("das Fenster", "the window"),
    ("die Sonne", "the sun"),
    ("der Regen", "the rain"),
    ("der Schnee", "the snow"),
    ("das Wetter", "the weather"),
];
