// ============================================================================
// Sine Lookup Table
// Raw Q32.32 samples of sin(x) for x evenly spaced over [0, pi/2]
// ============================================================================
//
// Generated offline; do not edit by hand.
// Entry i holds round(sin(i * (pi / 2) / 1023) * 2^32).

/// Number of samples in [`SIN_LUT`].
pub(crate) const SIN_LUT_SIZE: usize = 1024;

/// Sine samples over `[0, pi/2]`; index 0 is `sin(0)`, the last index is `sin(pi/2)`.
#[rustfmt::skip]
pub(crate) static SIN_LUT: [i64; SIN_LUT_SIZE] = [
    0, 6594835, 13189654, 19784443, 26379184, 32973864,
    39568466, 46162974, 52757374, 59351649, 65945784, 72539764,
    79133573, 85727195, 92320615, 98913818, 105506787, 112099508,
    118691964, 125284140, 131876021, 138467591, 145058835, 151649736,
    158240280, 164830451, 171420234, 178009612, 184598570, 191187094,
    197775166, 204362772, 210949897, 217536524, 224122638, 230708224,
    237293265, 243877748, 250461655, 257044972, 263627683, 270209772,
    276791224, 283372023, 289952155, 296531603, 303110351, 309688385,
    316265689, 322842248, 329418045, 335993065, 342567293, 349140714,
    355713311, 362285070, 368855975, 375426010, 381995159, 388563408,
    395130741, 401697143, 408262597, 414827089, 421390603, 427953123,
    434514634, 441075121, 447634568, 454192960, 460750280, 467306514,
    473861647, 480415662, 486968545, 493520280, 500070851, 506620243,
    513168440, 519715428, 526261190, 532805711, 539348977, 545890970,
    552431677, 558971081, 565509167, 572045920, 578581325, 585115365,
    591648025, 598179291, 604709146, 611237576, 617764565, 624290097,
    630814157, 637336730, 643857800, 650377352, 656895371, 663411841,
    669926747, 676440073, 682951805, 689461926, 695970422, 702477277,
    708982476, 715486003, 721987843, 728487981, 734986402, 741483089,
    747978029, 754471205, 760962602, 767452205, 773939998, 780425967,
    786910096, 793392369, 799872772, 806351289, 812827905, 819302605,
    825775373, 832246194, 838715052, 845181934, 851646822, 858109703,
    864570561, 871029380, 877486145, 883940842, 890393454, 896843968,
    903292367, 909738636, 916182760, 922624724, 929064513, 935502111,
    941937504, 948370676, 954801612, 961230297, 967656716, 974080853,
    980502693, 986922222, 993339424, 999754284, 1006166787, 1012576918,
    1018984661, 1025390002, 1031792925, 1038193416, 1044591458, 1050987038,
    1057380141, 1063770750, 1070158851, 1076544429, 1082927468, 1089307955,
    1095685873, 1102061208, 1108433945, 1114804068, 1121171563, 1127536415,
    1133898608, 1140258128, 1146614959, 1152969087, 1159320497, 1165669173,
    1172015101, 1178358266, 1184698653, 1191036246, 1197371031, 1203702994,
    1210032118, 1216358389, 1222681793, 1229002314, 1235319937, 1241634648,
    1247946431, 1254255272, 1260561156, 1266864068, 1273163993, 1279460916,
    1285754823, 1292045698, 1298333527, 1304618295, 1310899987, 1317178588,
    1323454084, 1329726460, 1335995700, 1342261790, 1348524716, 1354784463,
    1361041015, 1367294358, 1373544478, 1379791359, 1386034988, 1392275348,
    1398512426, 1404746206, 1410976675, 1417203816, 1423427617, 1429648061,
    1435865135, 1442078824, 1448289112, 1454495986, 1460699430, 1466899431,
    1473095973, 1479289042, 1485478624, 1491664703, 1497847265, 1504026295,
    1510201780, 1516373704, 1522542053, 1528706812, 1534867967, 1541025503,
    1547179406, 1553329661, 1559476254, 1565619170, 1571758395, 1577893914,
    1584025713, 1590153777, 1596278092, 1602398644, 1608515417, 1614628399,
    1620737573, 1626842926, 1632944444, 1639042111, 1645135914, 1651225839,
    1657311870, 1663393994, 1669472196, 1675546462, 1681616778, 1687683129,
    1693745501, 1699803879, 1705858250, 1711908599, 1717954912, 1723997174,
    1730035372, 1736069491, 1742099516, 1748125434, 1754147231, 1760164892,
    1766178403, 1772187750, 1778192919, 1784193895, 1790190665, 1796183214,
    1802171528, 1808155593, 1814135395, 1820110919, 1826082153, 1832049081,
    1838011690, 1843969965, 1849923893, 1855873459, 1861818650, 1867759451,
    1873695848, 1879627828, 1885555376, 1891478478, 1897397121, 1903311291,
    1909220973, 1915126154, 1921026819, 1926922955, 1932814549, 1938701585,
    1944584050, 1950461930, 1956335212, 1962203882, 1968067925, 1973927328,
    1979782077, 1985632159, 1991477558, 1997318263, 2003154259, 2008985531,
    2014812067, 2020633853, 2026450875, 2032263119, 2038070571, 2043873219,
    2049671047, 2055464043, 2061252193, 2067035483, 2072813899, 2078587429,
    2084356058, 2090119772, 2095878559, 2101632404, 2107381294, 2113125216,
    2118864155, 2124598099, 2130327034, 2136050946, 2141769822, 2147483648,
    2153192411, 2158896098, 2164594694, 2170288187, 2175976563, 2181659809,
    2187337911, 2193010856, 2198678631, 2204341222, 2209998615, 2215650798,
    2221297757, 2226939479, 2232575951, 2238207159, 2243833090, 2249453730,
    2255069068, 2260679088, 2266283778, 2271883125, 2277477116, 2283065737,
    2288648975, 2294226817, 2299799251, 2305366262, 2310927837, 2316483964,
    2322034630, 2327579821, 2333119524, 2338653726, 2344182415, 2349705577,
    2355223198, 2360735267, 2366241770, 2371742694, 2377238026, 2382727754,
    2388211863, 2393690342, 2399163178, 2404630357, 2410091866, 2415547693,
    2420997825, 2426442249, 2431880953, 2437313922, 2442741145, 2448162609,
    2453578301, 2458988208, 2464392318, 2469790617, 2475183093, 2480569734,
    2485950526, 2491325456, 2496694514, 2502057684, 2507414956, 2512766316,
    2518111751, 2523451250, 2528784798, 2534112385, 2539433998, 2544749623,
    2550059248, 2555362861, 2560660449, 2565952000, 2571237501, 2576516940,
    2581790304, 2587057581, 2592318759, 2597573825, 2602822766, 2608065571,
    2613302227, 2618532721, 2623757042, 2628975177, 2634187113, 2639392839,
    2644592342, 2649785609, 2654972630, 2660153390, 2665327879, 2670496084,
    2675657992, 2680813592, 2685962872, 2691105819, 2696242421, 2701372666,
    2706496542, 2711614037, 2716725139, 2721829836, 2726928115, 2732019965,
    2737105374, 2742184330, 2747256820, 2752322833, 2757382357, 2762435380,
    2767481890, 2772521875, 2777555323, 2782582222, 2787602561, 2792616328,
    2797623511, 2802624097, 2807618076, 2812605436, 2817586164, 2822560249,
    2827527679, 2832488443, 2837442529, 2842389925, 2847330619, 2852264600,
    2857191857, 2862112377, 2867026149, 2871933161, 2876833403, 2881726861,
    2886613526, 2891493384, 2896366426, 2901232638, 2906092010, 2910944531,
    2915790189, 2920628972, 2925460868, 2930285868, 2935103959, 2939915130,
    2944719369, 2949516666, 2954307008, 2959090385, 2963866786, 2968636199,
    2973398612, 2978154015, 2982902397, 2987643745, 2992378050, 2997105300,
    3001825483, 3006538589, 3011244606, 3015943524, 3020635331, 3025320017,
    3029997569, 3034667978, 3039331232, 3043987320, 3048636231, 3053277955,
    3057912480, 3062539795, 3067159889, 3071772753, 3076378373, 3080976741,
    3085567845, 3090151674, 3094728217, 3099297464, 3103859403, 3108414025,
    3112961318, 3117501271, 3122033874, 3126559117, 3131076988, 3135587477,
    3140090573, 3144586265, 3149074544, 3153555398, 3158028817, 3162494791,
    3166953308, 3171404358, 3175847931, 3180284017, 3184712604, 3189133683,
    3193547243, 3197953273, 3202351763, 3206742704, 3211126083, 3215501892,
    3219870120, 3224230756, 3228583791, 3232929213, 3237267013, 3241597181,
    3245919706, 3250234578, 3254541787, 3258841323, 3263133175, 3267417334,
    3271693789, 3275962531, 3280223549, 3284476833, 3288722373, 3292960159,
    3297190182, 3301412431, 3305626896, 3309833568, 3314032435, 3318223490,
    3322406721, 3326582119, 3330749673, 3334909375, 3339061214, 3343205181,
    3347341265, 3351469457, 3355589748, 3359702127, 3363806585, 3367903112,
    3371991698, 3376072335, 3380145011, 3384209719, 3388266447, 3392315187,
    3396355929, 3400388663, 3404413380, 3408430070, 3412438725, 3416439334,
    3420431888, 3424416377, 3428392793, 3432361126, 3436321366, 3440273505,
    3444217532, 3448153439, 3452081216, 3456000855, 3459912345, 3463815677,
    3467710843, 3471597833, 3475476639, 3479347250, 3483209657, 3487063853,
    3490909827, 3494747570, 3498577074, 3502398329, 3506211327, 3510016058,
    3513812514, 3517600685, 3521380562, 3525152138, 3528915402, 3532670346,
    3536416961, 3540155238, 3543885168, 3547606743, 3551319954, 3555024792,
    3558721248, 3562409314, 3566088981, 3569760240, 3573423082, 3577077500,
    3580723484, 3584361025, 3587990116, 3591610747, 3595222911, 3598826598,
    3602421800, 3606008508, 3609586715, 3613156411, 3616717589, 3620270239,
    3623814354, 3627349925, 3630876944, 3634395403, 3637905292, 3641406605,
    3644899332, 3648383465, 3651858997, 3655325919, 3658784223, 3662233900,
    3665674943, 3669107343, 3672531093, 3675946184, 3679352608, 3682750357,
    3686139424, 3689519800, 3692891477, 3696254447, 3699608702, 3702954235,
    3706291038, 3709619102, 3712938420, 3716248984, 3719550787, 3722843819,
    3726128075, 3729403545, 3732670223, 3735928100, 3739177168, 3742417421,
    3745648851, 3748871449, 3752085208, 3755290122, 3758486181, 3761673379,
    3764851708, 3768021161, 3771181730, 3774333408, 3777476187, 3780610059,
    3783735018, 3786851057, 3789958167, 3793056341, 3796145573, 3799225854,
    3802297178, 3805359537, 3808412925, 3811457333, 3814492755, 3817519183,
    3820536612, 3823545032, 3826544437, 3829534821, 3832516176, 3835488495,
    3838451771, 3841405997, 3844351166, 3847287272, 3850214306, 3853132263,
    3856041136, 3858940917, 3861831600, 3864713177, 3867585643, 3870448991,
    3873303213, 3876148303, 3878984254, 3881811060, 3884628713, 3887437208,
    3890236537, 3893026694, 3895807673, 3898579467, 3901342069, 3904095472,
    3906839671, 3909574659, 3912300430, 3915016976, 3917724292, 3920422371,
    3923111207, 3925790793, 3928461123, 3931122192, 3933773992, 3936416517,
    3939049761, 3941673719, 3944288383, 3946893747, 3949489806, 3952076554,
    3954653983, 3957222089, 3959780864, 3962330304, 3964870402, 3967401151,
    3969922547, 3972434583, 3974937253, 3977430552, 3979914472, 3982389010,
    3984854158, 3987309911, 3989756263, 3992193209, 3994620742, 3997038857,
    3999447548, 4001846809, 4004236636, 4006617022, 4008987961, 4011349448,
    4013701478, 4016044045, 4018377143, 4020700767, 4023014911, 4025319571,
    4027614739, 4029900412, 4032176584, 4034443249, 4036700402, 4038948037,
    4041186150, 4043414735, 4045633787, 4047843301, 4050043271, 4052233692,
    4054414559, 4056585867, 4058747611, 4060899786, 4063042386, 4065175407,
    4067298843, 4069412690, 4071516942, 4073611595, 4075696644, 4077772083,
    4079837908, 4081894115, 4083940697, 4085977651, 4088004971, 4090022652,
    4092030691, 4094029082, 4096017821, 4097996902, 4099966322, 4101926075,
    4103876156, 4105816563, 4107747288, 4109668330, 4111579681, 4113481339,
    4115373299, 4117255555, 4119128105, 4120990942, 4122844064, 4124687465,
    4126521142, 4128345089, 4130159303, 4131963780, 4133758514, 4135543502,
    4137318740, 4139084223, 4140839948, 4142585910, 4144322105, 4146048528,
    4147765177, 4149472046, 4151169133, 4152856431, 4154533939, 4156201652,
    4157859566, 4159507676, 4161145980, 4162774473, 4164393151, 4166002011,
    4167601049, 4169190261, 4170769643, 4172339192, 4173898904, 4175448775,
    4176988801, 4178518979, 4180039306, 4181549778, 4183050390, 4184541140,
    4186022024, 4187493039, 4188954181, 4190405447, 4191846833, 4193278336,
    4194699953, 4196111679, 4197513513, 4198905450, 4200287487, 4201659621,
    4203021849, 4204374167, 4205716573, 4207049063, 4208371634, 4209684283,
    4210987007, 4212279803, 4213562667, 4214835597, 4216098589, 4217351642,
    4218594751, 4219827914, 4221051128, 4222264389, 4223467697, 4224661046,
    4225844435, 4227017860, 4228181320, 4229334811, 4230478330, 4231611875,
    4232735444, 4233849032, 4234952639, 4236046261, 4237129895, 4238203540,
    4239267192, 4240320849, 4241364509, 4242398169, 4243421827, 4244435480,
    4245439126, 4246432763, 4247416387, 4248389998, 4249353592, 4250307167,
    4251250722, 4252184253, 4253107759, 4254021237, 4254924686, 4255818103,
    4256701486, 4257574833, 4258438141, 4259291410, 4260134637, 4260967819,
    4261790955, 4262604044, 4263407082, 4264200069, 4264983002, 4265755879,
    4266518699, 4267271460, 4268014159, 4268746797, 4269469369, 4270181876,
    4270884315, 4271576684, 4272258982, 4272931208, 4273593359, 4274245434,
    4274887432, 4275519352, 4276141190, 4276752947, 4277354621, 4277946210,
    4278527712, 4279099128, 4279660454, 4280211690, 4280752835, 4281283887,
    4281804845, 4282315708, 4282816475, 4283307144, 4283787714, 4284258184,
    4284718553, 4285168821, 4285608985, 4286039045, 4286458999, 4286868848,
    4287268589, 4287658223, 4288037747, 4288407161, 4288766465, 4289115657,
    4289454736, 4289783703, 4290102555, 4290411292, 4290709914, 4290998420,
    4291276809, 4291545080, 4291803234, 4292051268, 4292289183, 4292516978,
    4292734653, 4292942207, 4293139639, 4293326949, 4293504137, 4293671202,
    4293828144, 4293974962, 4294111657, 4294238227, 4294354673, 4294460994,
    4294557190, 4294643260, 4294719205, 4294785025, 4294840719, 4294886286,
    4294921728, 4294947044, 4294962233, 4294967296,
];
