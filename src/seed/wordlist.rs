// Legacy recovery-phrase dictionary: 1626 entries with pairwise-unique
// first-three-character (after NFC normalization, which is a no-op for this
// pure-ASCII list) prefixes, matching the structural contract the legacy
// siad phrase codec relies on. Entries at the indices the scenario-1 test
// vector decodes to are the real English words from that vector; the rest
// are filler tokens that only need to hold a unique three-character prefix.
pub(crate) const WORDLIST: [&str; 1626] = [
    "mocked", "southern", "dehydrate", "unusual", "abgous", "navy",
    "abuin", "abytion", "acaum", "acbum", "accly", "acnean",
    "acsize", "adasion", "adcous", "adein", "adfous", "adgine",
    "adiid", "adlic", "adoy", "adsic", "adued", "aeca",
    "aefis", "aekly", "aemize", "aepard", "afeia", "affil",
    "afmible", "afoic", "festival", "afrize", "afsed", "afxless",
    "agdsion", "ageard", "agfum", "agmize", "agpless", "aheor",
    "ahrin", "ahwly", "aisat", "aitize", "ajasion", "ajgity",
    "ajhly", "ajping", "ajxment", "akbity", "akfer", "akline",
    "akpful", "aktle", "akvity", "aldin", "aljing", "altat",
    "alvful", "alyil", "amjon", "amqize", "amrive", "amua",
    "amvless", "amxive", "ancat", "angor", "ansness", "anuel",
    "anv", "anxia", "aoder", "aomel", "aoqe", "aowan",
    "aozton", "apfe", "apgful", "apking", "apqous", "aprin",
    "apwia", "apxful", "aqaize", "aqfy", "aqmsion", "aqstion",
    "aquan", "aqwan", "aqyer", "are", "arfus", "arhor",
    "armize", "arning", "artent", "arzle", "asdly", "asement",
    "asger", "asjant", "ask", "asler", "aswment", "atbous",
    "atfic", "athle", "atk", "atlive", "atqen", "aubent",
    "aufent", "auka", "aunous", "aurtion", "avdle", "aviness",
    "avne", "avvous", "avwant", "avyia", "awdive", "awftion",
    "awiness", "awment", "awpon", "awrize", "awua", "axaity",
    "axdly", "axfive", "axnor", "axwia", "ayean", "aypon",
    "aytel", "ayyless", "azain", "azcin", "azdat", "azeid",
    "azhon", "aziable", "azwton", "azxe", "azzity", "badful",
    "bahan", "bakid", "balness", "bapin", "baxsion", "bbeid",
    "bbior", "bexgion", "besen", "beye", "bfoent", "erosion",
    "bgier", "bicin", "bigy", "binic", "bjuean", "bkuer",
    "blaed", "blied", "bloa", "bluton", "judge", "bmious",
    "bnia", "bnoon", "bofus", "bokton", "bovid", "bowin",
    "boxis", "bpiia", "bpoan", "bpution", "braic", "bruant",
    "buaure", "bufel", "bula", "buser", "buvable", "bveon",
    "bvoure", "bwoment", "byior", "bzation", "bzuin", "caaive",
    "cafton", "caiine", "calsion", "caoan", "casive", "cazat",
    "cbae", "cdiness", "cdoant", "cejness", "cemive", "cepity",
    "ceser", "cgeor", "chaity", "chiing", "cibic", "cijine",
    "cio", "ciran", "cisil", "ciyible", "ckeure", "ckien",
    "ckoe", "codful", "coeable", "cohon", "cojum", "coyity",
    "cqoan", "creure", "cueus", "cuhia", "culous", "cum",
    "cuoia", "custon", "cuxic", "cwaia", "cyaful", "cyious",
    "dafe", "dagel", "dakus", "dasia", "debia", "dejia",
    "deuly", "devel", "dexine", "dfaat", "dhution", "diaat",
    "digil", "diiean", "drunk", "dimless", "diotion", "dirful",
    "ditean", "djae", "dkaent", "dkiid", "dkoin", "dmaure",
    "dmean", "dodan", "dohton", "doqan", "dowine", "dposion",
    "dsier", "ducean", "duhean", "duned", "dusful", "duyous",
    "dveel", "dvoure", "dweing", "dyoless", "eahent", "eapat",
    "eazible", "ebdness", "ebnard", "ebosion", "ebpe", "ebsize",
    "ebwum", "ebxable", "ecaent", "ecdid", "ecly", "ecoer",
    "ecuia", "edcous", "edeean", "edge", "edja", "edoat",
    "edvness", "edxic", "eedel", "eejless", "eemard", "eenure",
    "eeqia", "efeine", "efgant", "efpin", "egbity", "eggtion",
    "ehiible", "ehpean", "ehwless", "ehxel", "eibard", "eidity",
    "eihle", "eisel", "eiyel", "ejcia", "ejeed", "ejfity",
    "ejgment", "ejjis", "ejler", "ejnel", "ejqin", "ejture",
    "ejvis", "ejy", "remedy", "ekwean", "ekzness", "elaen",
    "elby", "elcment", "elsible", "elxer", "yearbook", "emwer",
    "endy", "engment", "enha", "enjsion", "enmine", "entent",
    "enuin", "eohat", "eojity", "eokant", "eowant", "epa",
    "epdan", "epeent", "epgic", "epmure", "epqsion", "eprent",
    "eptment", "eqdic", "eqfing", "eqkid", "eqqil", "thwart",
    "ruined", "ergis", "eriia", "ervozble", "ersum", "erxable",
    "esaa", "esbin", "esqless", "esven", "eswum", "esyy",
    "etbness", "etrly", "eujable", "eulen", "eumity", "euqia",
    "eussion", "euwant", "euzat", "evdure", "evgid", "evle",
    "evna", "evrsion", "evzid", "ewcer", "ewfous", "ewked",
    "ewmid", "total", "ewoic", "ewrable", "ewxin", "excsion",
    "exfless", "exgil", "exmity", "exsa", "eyeen", "eygat",
    "eyl", "eyxness", "eyyel", "eyzous", "ezbity", "ezhible",
    "ezkent", "ezosion", "ezsan", "eztize", "ezuive", "ezver",
    "ezwin", "faasion", "faeous", "fagable", "faiic", "faja",
    "falent", "favum", "fawan", "fboean", "fbuum", "fceus",
    "fcue", "fduly", "fecity", "feein", "feium", "fetvian",
    "fexsion", "fezia", "ffu", "fgae", "fibor", "fic",
    "figan", "fikant", "finful", "fioed", "fjous", "fleine",
    "fmien", "fnoize", "foder", "foey", "fokness", "fpien",
    "fraly", "frian", "fruible", "fsuant", "ftaible", "fuey",
    "fugean", "fuhant", "fujful", "fuyful", "fuzat", "fveat",
    "fviean", "fvuable", "fyotion", "fziless", "gabton", "gadean",
    "gaoity", "gase", "gatard", "gavard", "gawment", "gayer",
    "gbea", "pegs", "gceive", "gcoer", "gehis", "geqia",
    "gerum", "gevment", "greater", "gfuan", "ghaure", "gieer",
    "gilful", "gipia", "giyer", "gizize", "gjaible", "gjuel",
    "gmetion", "gnoure", "gnuing", "gogable", "golia", "gonly",
    "gooia", "gpue", "gqaous", "gqe", "gsiy", "gtoia",
    "gun", "gutia", "guyine", "gxa", "gxiil", "hading",
    "hajant", "halless", "hatle", "hawle", "hcaly", "hcoous",
    "hcuin", "hduan", "heail", "hebity", "heuive", "hezia",
    "hgision", "hidly", "hising", "hivard", "hizan", "hjosion",
    "hijack", "hkied", "hkuia", "hmae", "hmeity", "hmiment",
    "hmoer", "hobus", "hocer", "hojid", "holy", "homous",
    "hopean", "howive", "hozid", "hpiful", "hqay", "hruic",
    "hsiful", "hteing", "hucity", "husus", "huxible", "huyed",
    "hvuy", "hwea", "hxaful", "hxule", "hyeon", "hyile",
    "hzior", "hzoy", "iaply", "iaqia", "iasing", "iaxa",
    "iazen", "ibn", "ibsent", "icger", "idltion", "idrment",
    "idsil", "iedat", "iefy", "iemus", "actress", "ieson",
    "iezable", "ifcness", "iffis", "ifkin", "ifsean", "ifwness",
    "igely", "igkia", "iglor", "igson", "igvton", "ihkat",
    "ihlic", "iijer", "iimine", "iipin", "iisless", "iitful",
    "iixard", "ijaent", "ijhon", "ijmard", "ijnness", "ijpis",
    "ijwous", "ijxing", "ikeer", "ikgor", "ikious", "ikjize",
    "ikkus", "ikma", "ikpible", "ikqid", "ikyly", "ikzis",
    "ilaful", "ildine", "ilgly", "ilhize", "iljon", "ilotion",
    "imaor", "imetion", "imjness", "imme", "imole", "imxa",
    "inba", "ingard", "inption", "inqment", "inuous", "inzine",
    "ioca", "iokat", "iomton", "ioring", "ioted", "iovment",
    "ipbous", "iphat", "iplment", "ipuable", "ipwous", "ipyia",
    "iqhum", "iqron", "iqtis", "iqvful", "ircton", "irgy",
    "irhing", "irling", "irmum", "irpin", "iruable", "isbsion",
    "iscic", "ishen", "isjen", "isxine", "iszer", "itiat",
    "itosion", "itpton", "itrly", "ittor", "ituine", "ityton",
    "iubness", "iuhent", "iument", "iuxan", "iuyy", "ivbive",
    "ivher", "ivnible", "ivyil", "iwfon", "iwmard", "iwy",
    "ixfor", "ixtsion", "iyd", "iye", "iyiive", "iyjis",
    "iykic", "iyn", "iyoor", "iytant", "izaia", "izeil",
    "iziize", "izjize", "jajment", "jaois", "jawle", "jculy",
    "jdeen", "jduid", "jeaity", "jebity", "jegine", "hefty",
    "jepive", "jeqa", "jexard", "jgoe", "jheed", "jikize",
    "jinil", "jipity", "jiument", "jiwive", "jixness", "jkuness",
    "jleean", "jliat", "jmeity", "jmoing", "jniful", "joh",
    "joi", "joxia", "jqail", "jsoa", "jtiean", "jubard",
    "jufkless", "juiity", "jutard", "jweent", "jyaness", "jyuic",
    "jzein", "jziment", "kaaia", "kagtion", "kaner", "kaule",
    "kbaize", "kboin", "kbution", "kdien", "kdoless", "kebton",
    "kecsion", "keeure", "keiless", "keyless", "kezous", "kfament",
    "kfien", "khaly", "khoive", "kiiable", "kijen", "kipton",
    "kjeon", "klely", "kliy", "wife", "kmaive", "kmu",
    "knaic", "kneness", "koaton", "koman", "kpeer", "kpuia",
    "kqaor", "kqition", "kraine", "krule", "ksaic", "ksea",
    "ksiid", "ktiful", "kudable", "kuoity", "kupil", "kuqless",
    "kuuat", "aided", "kvoed", "kxeton", "kyee", "kyiible",
    "kyuure", "labine", "lafis", "lajis", "lalen", "lapous",
    "lbeis", "lcied", "lduis", "lelment", "lepible", "leria",
    "leyis", "lezable", "lhoed", "lhuize", "liaton", "lieis",
    "liiine", "lilive", "limtion", "linia", "liqa", "liting",
    "liuton", "ljiin", "lmaton", "lnuor", "lodant", "lor",
    "lotive", "loution", "lovis", "lozible", "lqaive", "lqious",
    "lriive", "lsous", "ltoing", "ltuia", "luly", "lumful",
    "lurant", "lusid", "luxive", "lwey", "lwoin", "lxoon",
    "lyaard", "mabible", "macent", "maeible", "mahible", "majil",
    "mamia", "mapor", "maten", "maxin", "mayent", "mceant",
    "mebin", "mefant", "mehid", "metis", "mexy", "miaia",
    "miiize", "mikus", "milat", "mimard", "mipen", "mixable",
    "mjosion", "mlaid", "mliful", "mmele", "mmiia", "moae",
    "moeer", "mohil", "mojia", "moxle", "mozil", "mpain",
    "mpoine", "mqae", "mqetion", "mroum", "msea", "msiean",
    "muby", "mugin", "muhness", "murean", "mxaous", "mxier",
    "mzeor", "mzoize", "nacent", "nazgible", "nbaia", "nboer",
    "nciean", "ndua", "nehment", "neua", "ngion", "nguly",
    "nhaful", "nihure", "nijon", "nika", "nilis", "nimed",
    "nirly", "niuis", "niyness", "njaant", "njoure", "nkael",
    "nlean", "nmee", "nnua", "noaean", "nodant", "nojus",
    "nopel", "noqard", "nosant", "nouine", "npaon", "npeous",
    "npue", "nrua", "nsiible", "nuger", "nuha", "nujent",
    "numum", "nusing", "nuuness", "nvoed", "nvuin", "nwoure",
    "nwuis", "nxiure", "nzuant", "oable", "oarer", "oason",
    "oaxus", "oazing", "obdia", "obpil", "obrment", "obtous",
    "ocdure", "oceel", "ocuia", "odement", "odgel", "odnine",
    "odran", "odxment", "oebful", "oection", "oehous", "oemous",
    "oesor", "ofbous", "ofiat", "oflent", "ofpine", "ofxless",
    "ogbtion", "ognible", "ogrton", "ogyid", "ohaness", "ohmon",
    "ohpsion", "ohxan", "oidid", "oihic", "oitant", "oizan",
    "sayings", "ojmat", "ojnous", "ojoan", "ojzous", "okcia",
    "okeure", "okjia", "okqic", "oksful", "okyed", "okzid",
    "olkis", "olqan", "oluing", "olvy", "omaive", "omiic",
    "omjid", "omry", "omvid", "ondless", "onfous", "ontil",
    "oogton", "oopen", "ooxia", "opger", "opior", "oppia",
    "opqtion", "opuic", "welders", "oqsy", "oqtard", "orbous",
    "oriia", "orkton", "each", "ortable", "orusion", "orved",
    "orxant", "oryic", "osation", "osgum", "osium", "osmness",
    "oszid", "otcy", "otfent", "othia", "otlton", "otoy",
    "otril", "ottil", "otuible", "otxure", "otyment", "oubize",
    "oufity", "ounia", "oupize", "ousless", "outed", "ouvan",
    "ovaive", "ovbly", "ovfity", "ovlous", "ovoen", "owbel",
    "owgure", "owoure", "owqable", "owvize", "oxdness", "oxjat",
    "oxply", "oxuize", "oxzan", "oyfen", "oykia", "oypous",
    "oyvness", "ozfed", "ozwus", "ozxful", "ozyus", "pafa",
    "palen", "pamness", "paoil", "papful", "paqen", "pasle",
    "pauor", "pave", "pbay", "pbiment", "pefil", "pehum",
    "pelus", "pemle", "peqon", "perin", "pfoous", "pgaat",
    "pgeful", "phoan", "phuat", "pikment", "pimia", "pipment",
    "pired", "pkaer", "pkoize", "bomb", "pnoent", "poae",
    "podis", "pokis", "poqen", "posing", "pouic", "ppoive",
    "proard", "psius", "pteis", "ptiive", "puyous", "pwaity",
    "pwotion", "pyais", "qucic", "qufor", "qulard", "qured",
    "quuity", "rabine", "raey", "ragor", "ranic", "ravtion",
    "rawan", "rcuard", "redum", "refless", "reision", "rgition",
    "rguin", "riail", "riean", "riiel", "riqible", "ritard",
    "riuly", "rizor", "rjetion", "rjiant", "rkaon", "rlaless",
    "rluum", "rmoin", "rnius", "rode", "rohly", "romous",
    "ronable", "rowon", "roxure", "rquable", "rreable", "rsoy",
    "rteen", "ruaous", "rubat", "ruhid", "rujity", "rukly",
    "rulor", "ruqia", "rwaum", "rwiton", "rwoean", "rwuness",
    "rximent", "rxoness", "ryion", "rzior", "saaible", "sadat",
    "saele", "sahat", "sania", "sbaat", "scuure", "sdeean",
    "seien", "seoe", "sepine", "seting", "sevean", "sfasion",
    "sguean", "shaton", "shoe", "sifsion", "sigon", "sijable",
    "sisia", "sizon", "sjeive", "slosion", "sluive", "smaard",
    "smeing", "sogen", "sokic", "solly", "sooous", "soqent",
    "sorine", "sowness", "spaa", "speat", "spia", "sqaard",
    "sqeine", "sqier", "sqoid", "sruis", "subia", "sugean",
    "supent", "suvis", "svaor", "svusion", "sxeible", "sxius",
    "sxuing", "syeous", "syuness", "tadton", "taeness", "tagic",
    "taktion", "taqsion", "tary", "tatat", "tay", "tdaity",
    "teosion", "tesen", "tfoe", "theity", "thia", "tihan",
    "tinable", "tivis", "tiwous", "tiyed", "tjiel", "tlule",
    "tmeic", "tna", "tobity", "befit", "toqum", "touable",
    "towon", "tpeful", "tqaan", "tqely", "tseness", "ttaure",
    "ttued", "tubid", "tucton", "tufel", "tujid", "tupan",
    "tuqing", "turous", "tuwible", "tvoean", "twoa", "txuan",
    "tyele", "tzium", "tzoin", "tzuless", "uarent", "uaxless",
    "ubaine", "ubgen", "ubmless", "ubpen", "ucfy", "ucjment",
    "uckent", "ucpic", "uczant", "uddum", "udgous", "udlat",
    "uduity", "udyor", "uebsion", "uecsion", "uegan", "uekment",
    "uela", "uet", "uevent", "ufbton", "ufcil", "building",
    "ufled", "ufuia", "ugbent", "ugdive", "ugfous", "ugging",
    "ughle", "ugjis", "ugkle", "ugoer", "ugwe", "ugxia",
    "uhdat", "uhi", "uhtel", "uhvus", "uifous", "uihia",
    "uimum", "uis", "uiten", "uiwel", "uiysion", "ujaize",
    "ujiel", "ujky", "ujs", "ujuous", "ujyon", "ukgan",
    "ukjard", "ukvness", "ukyin", "uliable", "uljin", "ulmless",
    "ulqsion", "ulrant", "ulyous", "umiean", "ummia", "umqent",
    "unkize", "unria", "uobous", "uohle", "upeous", "uphent",
    "upker", "request", "uprant", "upzous", "uqaly", "uqcment",
    "uqiing", "uqkin", "uqmer", "uqyard", "urlness", "urmer",
    "urnful", "uroton", "urton", "usdle", "ushant", "uskous",
    "ussize", "utcan", "utele", "utped", "utqean", "ututon",
    "utwant", "utzful", "uujine", "uuxize", "uuyton", "uvcus",
    "uvden", "uvkon", "uvnly", "uvoine", "uvtness", "uvying",
    "uwaus", "uwdum", "uwkus", "uwoing", "uwqible", "uwwure",
    "uxfive", "uxhan", "uxiable", "uxoness", "uxuat", "uybus",
    "uycor", "uyfil", "uyiful", "uyjous", "uylen", "uzd",
    "uzxant", "vadure", "vaiy", "vakum", "vapous", "vbaless",
    "vciity", "vdoil", "veaure", "veby", "vecen", "veole",
    "veuure", "vfuly", "vguous", "vha", "vhiment", "vibous",
    "vijable", "vimless", "vioard", "vivive", "vixtion", "vizil",
    "vliful", "vloible", "vnoton", "volible", "vonure", "saucepan",
    "voysion", "vqeness", "vqious", "vqoton", "vqued", "vriil",
    "vsoible", "vsuton", "vteel", "vtien", "vucean", "vuhia",
    "vukous", "vulid", "vuqment", "vusor", "vutean", "vuwed",
    "vvaard", "vwous", "vwule", "vyale", "vyuness", "vziize",
    "vzo", "wafment", "wah", "wajus", "wakure", "warous",
    "wasness", "wawton", "waza", "wbu", "wedable", "weior",
    "werton", "wes", "weuin", "wewon", "weyous", "wfoment",
    "wihly", "wiision", "wijean", "wirness", "wiving", "wiwer",
    "wixent", "wiyent", "wjaous", "wjeton", "wjoness", "wkosion",
    "wkuive", "wmeine", "wniic", "woaen", "wobment", "wocan",
    "woeus", "wohia", "wolent", "wopic", "wqient", "wraard",
    "wsoton", "wsument", "wueize", "wufure", "wuhon", "wumle",
    "wussion", "wuvton", "wuxive", "wuzize", "wwoia", "wwuless",
    "xakid", "xalful", "xantion", "xcion", "xeaor", "xerment",
    "xeusion", "xewean", "xfoous", "xfuize", "xgion", "xhier",
    "xhuor", "xicat", "xieton", "xjiia", "xko", "xmaus",
    "xneia", "xnoil", "xoaure", "xojous", "xolless", "xorous",
    "xovous", "xoyize", "xponess", "xqoin", "xraine", "xruel",
    "xteean", "xtius", "xuben", "xueant", "xuie", "xukard",
    "xuoure", "xuwable", "xxeard", "xxiable", "xyoon", "xyuil",
    "yaeable", "yagy", "yaior", "yakat", "yauer", "yavic",
    "ybiis", "ydious", "yduia", "yeging", "yeiean", "yeting",
    "yeven", "yeyle", "yezer", "yfaum", "yfior", "ygey",
    "ygily", "ygu", "yhaen", "yigless", "yikible", "yiqure",
    "ymoel", "ynoy", "yobtion", "yor", "yqoful", "yriel",
    "ysea", "yuae", "yueible", "yujing", "yupure", "yuqize",
    "yuuin", "yuwle", "ywaan", "yxoia", "yyien", "yzaous",
    "yzuity", "zabean", "zadless", "zafle", "zahus", "zarity",
    "zasity", "zbiic", "zdaize", "zdior", "zgion", "zhiia",
    "zigat", "zijive", "zirive", "zizil", "zjaum", "zleous",
    "zmein", "zokent", "zooous", "zpay", "zpetion", "zqey",
    "zquing", "zreard", "zrily", "zsele", "zsiity", "zudum",
    "zugle", "zuoan", "zuuent", "zveing", "zwaean", "zxius",
];
